use log::warn;
use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::components::notification::{ToastNotifier, Toaster};
use crate::contact::sink::configured_sink;
use crate::nav::controller;
use crate::nav::section::SectionId;
use crate::nav::state::{NavAction, NavState};
use crate::sections::{
    contact::Contact, difference::Difference, footer::Footer, hero::Hero, membership::Membership,
    membership_dialog::MembershipDialog, nav_bar::NavBar, progress_bar::ProgressBar, story::Story,
    videos::Videos,
};
use crate::toast::{ToastAction, ToastQueue};
use crate::viewport::{BrowserViewport, WindowListener};

fn nav_callback(dispatcher: UseReducerDispatcher<NavState>, action: NavAction) -> Callback<()> {
    Callback::from(move |_| dispatcher.dispatch(action))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav = use_reducer(NavState::default);
    let toasts = use_reducer(ToastQueue::default);
    let sink = use_state(configured_sink);

    // Scroll tracking for the nav bar styling and the progress bar
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let dispatch = move |action: NavAction| dispatcher.dispatch(action);
                controller::on_scroll(&BrowserViewport, &dispatch);
                let listener = WindowListener::add("scroll", move |_| {
                    controller::on_scroll(&BrowserViewport, &dispatch);
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Deep links such as /#membership
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let hash = web_sys::window()
                    .and_then(|window| window.location().hash().ok())
                    .unwrap_or_default();
                let anchor = hash.trim_start_matches('#');
                if !anchor.is_empty() {
                    let dispatch = |action: NavAction| dispatcher.dispatch(action);
                    if let Err(err) = controller::navigate_to(&BrowserViewport, dispatch, anchor) {
                        warn!("Deep link: {err}");
                    }
                }
                || ()
            },
            (),
        );
    }

    // Escape dismisses the membership dialog
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::add("keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |key| key.key() == "Escape");
                    if is_escape {
                        dispatcher.dispatch(NavAction::CloseDialog);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |section: SectionId| {
            let dispatch = |action: NavAction| dispatcher.dispatch(action);
            if let Err(err) = controller::navigate_to_section(&BrowserViewport, dispatch, section) {
                warn!("Navigation: {err}");
            }
        })
    };

    let on_select_tier = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: ()| {
            let dispatch = |action: NavAction| dispatcher.dispatch(action);
            if let Err(err) = controller::select_tier(&BrowserViewport, dispatch) {
                warn!("Tier selection: {err}");
            }
        })
    };

    let on_toggle_menu = nav_callback(nav.dispatcher(), NavAction::ToggleMenu);
    let on_close_menu = nav_callback(nav.dispatcher(), NavAction::CloseMenu);
    let on_explore = nav_callback(nav.dispatcher(), NavAction::OpenDialog);
    let on_close_dialog = nav_callback(nav.dispatcher(), NavAction::CloseDialog);

    let notifier = {
        let dispatcher = toasts.dispatcher();
        ToastNotifier::new(Callback::from(move |toast| {
            dispatcher.dispatch(ToastAction::Push(toast))
        }))
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="landing-page">
            <ProgressBar progress={nav.scroll_progress} />
            <NavBar
                state={(*nav).clone()}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
                {on_close_menu}
                on_explore={on_explore.clone()}
            />

            <Hero on_navigate={on_navigate.clone()} />
            <Membership on_explore={on_explore.clone()} />
            <Videos {on_explore} />
            <Story />
            <Difference />
            <Contact sink={(*sink).clone()} {notifier} />
            <Footer {on_navigate} />

            <MembershipDialog
                open={nav.dialog_open}
                on_close={on_close_dialog}
                {on_select_tier}
            />
            if !toasts.is_empty() {
                <Toaster toasts={toasts.iter().cloned().collect::<Vec<_>>()} {on_dismiss} />
            }

            <style>
                {r#"
                    *, *::before, *::after { box-sizing: border-box; }
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #020617;
                        color: #f1f5f9;
                    }
                    h1, h2, h3, h4, p { margin: 0; }
                    button { font: inherit; border: 0; background: none; color: inherit; cursor: pointer; }
                    .landing-page { min-height: 100vh; overflow-x: hidden; }
                    .icon { width: 1.25rem; height: 1.25rem; }
                    .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .page-section { position: relative; padding: 6rem 0; scroll-margin-top: 5rem; }
                    .section-dark { background: #020617; }
                    .section-slate { background: #0f172a; }
                    .section-rule {
                        position: absolute; top: 0; left: 0; width: 100%; height: 1px;
                        background: linear-gradient(90deg, transparent, rgba(59, 130, 246, 0.5), transparent);
                    }
                    .section-heading { text-align: center; margin-bottom: 4rem; }
                    .section-heading h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #fff; margin: 1rem 0 1.5rem; }
                    .section-heading p { font-size: 1.125rem; color: #94a3b8; max-width: 42rem; margin: 0 auto; }
                    .eyebrow { color: #60a5fa; font-weight: 600; letter-spacing: 0.05em; text-transform: uppercase; font-size: 0.875rem; }
                    .eyebrow-amber { color: #fbbf24; }
                    .gradient-text {
                        background: linear-gradient(90deg, #fff, #dbeafe, #60a5fa);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .muted { color: #94a3b8; }
                    .pill {
                        display: inline-flex; align-items: center; gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .pill-amber { background: rgba(245, 158, 11, 0.1); border: 1px solid rgba(245, 158, 11, 0.3); color: #fbbf24; }
                    .price-was { color: #64748b; text-decoration: line-through; margin-left: 0.5rem; }
                    .badge-amber { background: #f59e0b; }
                    .badge-blue { background: #3b82f6; }
                    .badge-slate { background: #64748b; }
                    .button {
                        display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
                        padding: 0.65rem 1.25rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .button:hover { transform: scale(1.05); }
                    .button:active { transform: scale(0.95); }
                    .button-block { width: 100%; }
                    .button-large { padding: 1.1rem 2rem; font-size: 1.125rem; }
                    .button-primary {
                        color: #fff;
                        background: linear-gradient(90deg, #2563eb, #3b82f6);
                        box-shadow: 0 20px 25px rgba(59, 130, 246, 0.2);
                    }
                    .button-blue { color: #fff; background: #2563eb; }
                    .button-blue:hover { background: #3b82f6; }
                    .button-amber { color: #0f172a; font-weight: 700; background: linear-gradient(90deg, #f59e0b, #fbbf24); }
                    .button-outline { color: #fff; border: 1px solid #475569; }
                    .button-outline:hover { background: #334155; }
                    .button-outline-amber { color: #fbbf24; border: 2px solid rgba(245, 158, 11, 0.5); }
                    .button-outline-amber:hover { background: rgba(245, 158, 11, 0.1); }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(60px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes scaleIn {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes slideInRight {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .stagger > * { opacity: 0; animation: fadeInUp 0.8s ease-out forwards; }
                    .stagger > *:nth-child(1) { animation-delay: 0.2s; }
                    .stagger > *:nth-child(2) { animation-delay: 0.35s; }
                    .stagger > *:nth-child(3) { animation-delay: 0.5s; }
                    .stagger > *:nth-child(4) { animation-delay: 0.65s; }
                    .stagger > *:nth-child(5) { animation-delay: 0.8s; }
                    .stagger > *:nth-child(6) { animation-delay: 0.95s; }
                    .stagger > *:nth-child(7) { animation-delay: 1.1s; }
                "#}
            </style>
        </div>
    }
}
