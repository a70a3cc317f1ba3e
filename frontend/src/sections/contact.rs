use log::debug;
use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::components::icon::{Icon, IconView};
use crate::components::notification::ToastNotifier;
use crate::contact::form::{ContactField, ContactForm, FormAction};
use crate::contact::sink::SharedSink;
use crate::contact::submit;
use crate::content::{lifetime_tier, LIFETIME_HIGHLIGHTS};
use crate::nav::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub sink: SharedSink,
    pub notifier: ToastNotifier,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactForm::default);

    let onsubmit = {
        let form = form.clone();
        let sink = props.sink.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut pending = (*form).clone();
            let Ok(submission) = submit::accept(&mut pending, &notifier) else {
                return;
            };
            form.dispatch(FormAction::Clear);

            let sink = sink.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                if let Err(err) = submit::deliver(&submission, &*sink, &notifier).await {
                    debug!("Contact delivery ended with: {err}");
                }
            });
        })
    };

    let on_field = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let lifetime = lifetime_tier();

    html! {
        <section id={SectionId::Contact.anchor()} class="page-section section-dark contact">
            <div class="contact-wash"></div>
            <div class="container">
                <div class="section-heading stagger">
                    <span class="eyebrow eyebrow-amber">{"Get Started"}</span>
                    <h2>{"Ready to Improve Your Game?"}</h2>
                    <p>{"Choose the option that fits how you learn. Start with structured lessons, then add coaching if you want faster feedback."}</p>
                </div>

                <div class="contact-grid">
                    <div class="offer-card">
                        <div class="offer-title">
                            <IconView icon={Icon::Crown} />
                            <h3>{lifetime.name}</h3>
                        </div>
                        <div class="offer-price">
                            <span class="price">{lifetime.price}</span>
                            <span class="price-was">{lifetime.original_price}</span>
                        </div>
                        <ul class="feature-list">
                            { for LIFETIME_HIGHLIGHTS.iter().map(|feature| html! {
                                <li key={*feature}>
                                    <IconView icon={Icon::CheckCircle} />
                                    {*feature}
                                </li>
                            }) }
                        </ul>
                        <div class="offer-note">
                            <IconView icon={Icon::Users} />
                            <span>{"One-time payment, lifetime access"}</span>
                        </div>
                    </div>

                    <div class="form-card">
                        <h3>{"Get Started"}</h3>
                        <p class="form-intro">{"Enter your info and we'll send you membership details."}</p>
                        <form {onsubmit}>
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                name="name"
                                placeholder="Your name"
                                required=true
                                value={form.name.clone()}
                                oninput={on_field(ContactField::Name)}
                            />
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                placeholder="your@email.com"
                                required=true
                                value={form.email.clone()}
                                oninput={on_field(ContactField::Email)}
                            />
                            <label for="phone">{"Phone (optional)"}</label>
                            <input
                                id="phone"
                                name="phone"
                                type="tel"
                                placeholder="(555) 123-4567"
                                value={form.phone.clone()}
                                oninput={on_field(ContactField::Phone)}
                            />
                            <button type="submit" class="button button-amber button-block button-large">
                                <IconView icon={Icon::Crown} />
                                {"Get Membership Details"}
                            </button>
                            <p class="form-footnote">{"No payment required now. We'll contact you with next steps."}</p>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contact-wash {
                        position: absolute; inset: 0;
                        background: linear-gradient(to bottom, #0f172a, transparent, #0f172a);
                    }
                    .contact-grid {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .offer-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(15, 23, 42, 0.5);
                        border: 1px solid rgba(245, 158, 11, 0.3);
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    .offer-title { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; color: #fbbf24; }
                    .offer-title .icon { width: 2rem; height: 2rem; }
                    .offer-title h3 { font-size: 1.5rem; font-weight: 700; color: #fff; }
                    .offer-price { margin-bottom: 1.5rem; }
                    .offer-price .price { font-size: 3rem; font-weight: 700; color: #fff; }
                    .offer-card .feature-list .icon { color: #fbbf24; }
                    .offer-note { display: flex; align-items: center; gap: 0.5rem; color: #fbbf24; font-size: 0.875rem; }
                    .offer-note .icon { width: 1rem; height: 1rem; }
                    .form-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #1e293b;
                        border: 1px solid #334155;
                        animation: slideInRight 0.6s ease-out both;
                    }
                    .form-card h3 { font-size: 1.5rem; font-weight: 700; color: #fff; margin-bottom: 0.5rem; }
                    .form-intro { color: #94a3b8; margin-bottom: 1.5rem; }
                    .form-card form { display: flex; flex-direction: column; gap: 0.5rem; }
                    .form-card label { color: #cbd5e1; margin-top: 0.5rem; }
                    .form-card input {
                        padding: 0.65rem 0.8rem;
                        border-radius: 0.5rem;
                        border: 1px solid #475569;
                        background: #0f172a;
                        color: #fff;
                    }
                    .form-card input:focus { outline: 2px solid #3b82f6; outline-offset: 1px; }
                    .form-card button[type="submit"] { margin-top: 1rem; }
                    .form-footnote { font-size: 0.75rem; color: #64748b; text-align: center; }
                    @media (max-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
