use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{BUSINESS_NAME, CONTACT_EMAIL, INSTRUCTOR, NAV_LINKS, TEACHING_SINCE};
use crate::nav::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="logo-mark"><IconView icon={Icon::Crown} /></span>
                            <span class="footer-name">{BUSINESS_NAME}</span>
                        </div>
                        <p>{"Online golf instruction built on fundamentals, from a coach teaching since 1986. Learn from anywhere in the world."}</p>
                        <a href={mailto.clone()} class="footer-mail" aria-label="Email">
                            <IconView icon={Icon::Mail} />
                        </a>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for NAV_LINKS.iter().map(|link| {
                                let section = link.section;
                                let onclick = props.on_navigate.reform(move |_: MouseEvent| section);
                                html! {
                                    <li key={section.anchor()}>
                                        <button class="footer-link" {onclick}>{link.label}</button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <ul class="footer-contact">
                            <li>{INSTRUCTOR}</li>
                            <li><a href={mailto} class="footer-link">{CONTACT_EMAIL}</a></li>
                            <li>{format!("Teaching since {TEACHING_SINCE}")}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {year} {BUSINESS_NAME}. All rights reserved.")}</p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer { background: #020617; border-top: 1px solid #1e293b; padding: 4rem 0; }
                    .footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 3rem; margin-bottom: 3rem; }
                    .footer-logo { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                    .footer-logo .logo-mark { width: 2.5rem; height: 2.5rem; }
                    .footer-name { font-weight: 700; font-size: 1.25rem; color: #fff; }
                    .footer-brand p { color: #94a3b8; max-width: 28rem; margin-bottom: 1.5rem; }
                    .footer-mail {
                        width: 2.5rem; height: 2.5rem;
                        border-radius: 0.5rem;
                        background: #1e293b;
                        color: #fff;
                        display: inline-flex; align-items: center; justify-content: center;
                        transition: background 0.2s ease;
                    }
                    .footer-mail:hover { background: #2563eb; }
                    .site-footer h4 { color: #fff; font-weight: 600; margin-bottom: 1rem; }
                    .site-footer ul { list-style: none; padding: 0; display: grid; gap: 0.75rem; }
                    .footer-contact { color: #94a3b8; }
                    .footer-link { color: #94a3b8; transition: color 0.2s ease; }
                    .footer-link:hover { color: #60a5fa; }
                    .footer-bottom { border-top: 1px solid #1e293b; padding-top: 2rem; text-align: center; color: #64748b; font-size: 0.875rem; }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </footer>
    }
}
