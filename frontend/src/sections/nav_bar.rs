use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{BUSINESS_NAME, NAV_LINKS, TAGLINE};
use crate::nav::section::SectionId;
use crate::nav::state::NavState;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub state: NavState,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
    pub on_close_menu: Callback<()>,
    pub on_explore: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps {
        state,
        on_navigate,
        on_toggle_menu,
        on_close_menu,
        on_explore,
    } = props;

    let go_home = on_navigate.reform(|_: MouseEvent| SectionId::Home);

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let explore = on_explore.reform(|_: MouseEvent| ());

    // The mobile button also folds the menu away behind the dialog
    let explore_from_menu = {
        let on_explore = on_explore.clone();
        let on_close_menu = on_close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            on_explore.emit(());
            on_close_menu.emit(());
        })
    };

    let link_button = |class: &'static str| {
        move |link: &crate::content::NavLink| {
            let section = link.section;
            let onclick = on_navigate.reform(move |_: MouseEvent| section);
            html! {
                <button
                    key={section.anchor()}
                    class={classes!(class, state.is_active(section).then_some("active"))}
                    {onclick}
                >
                    {link.label}
                </button>
            }
        }
    };

    html! {
        <nav class={classes!("top-nav", state.scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    <span class="logo-mark"><IconView icon={Icon::Crown} /></span>
                    <span class="logo-text">
                        <span class="logo-name">{BUSINESS_NAME}</span>
                        <span class="logo-tagline">{TAGLINE}</span>
                    </span>
                </button>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(link_button("nav-link")) }
                    <button class="nav-explore" onclick={explore}>
                        <IconView icon={Icon::Crown} />
                        {"Explore Membership"}
                    </button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <IconView icon={if state.menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            if state.menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(link_button("mobile-link")) }
                    <button class="nav-explore mobile-explore" onclick={explore_from_menu}>
                        <IconView icon={Icon::Crown} />
                        {"Explore Membership"}
                    </button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: background 0.5s ease, border-color 0.5s ease;
                        border-bottom: 1px solid transparent;
                        animation: navDrop 0.6s ease-out;
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .top-nav.scrolled {
                        background: rgba(2, 6, 23, 0.95);
                        backdrop-filter: blur(20px);
                        border-bottom-color: rgba(30, 58, 138, 0.3);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-align: left;
                    }
                    .logo-mark {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        border: 1px solid #1d4ed8;
                        background: #0f172a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #60a5fa;
                    }
                    .logo-text { display: flex; flex-direction: column; }
                    .logo-name { font-weight: 700; font-size: 1.1rem; color: #fff; }
                    .logo-tagline { font-size: 0.75rem; color: #60a5fa; }
                    .nav-links { display: flex; align-items: center; gap: 0.25rem; }
                    .nav-link, .mobile-link {
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        color: #cbd5e1;
                        font-weight: 500;
                        transition: all 0.2s ease;
                    }
                    .nav-link:hover, .mobile-link:hover { color: #fff; background: rgba(30, 41, 59, 0.5); }
                    .nav-link.active, .mobile-link.active { color: #60a5fa; background: rgba(59, 130, 246, 0.1); }
                    .nav-explore {
                        margin-left: 1rem;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.6rem 1.2rem;
                        border-radius: 0.5rem;
                        color: #fff;
                        background: linear-gradient(90deg, #2563eb, #3b82f6);
                        box-shadow: 0 10px 20px rgba(59, 130, 246, 0.2);
                    }
                    .burger-menu {
                        display: none;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                        background: rgba(30, 41, 59, 0.5);
                        color: #fff;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        padding: 1.5rem 1rem;
                        background: rgba(2, 6, 23, 0.95);
                        border-top: 1px solid rgba(30, 58, 138, 0.3);
                        animation: fadeInUp 0.3s ease-out;
                    }
                    .mobile-link { text-align: left; }
                    .mobile-explore { margin: 1rem 0 0; justify-content: center; }
                    @media (max-width: 1024px) {
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (max-width: 640px) {
                        .logo-text { display: none; }
                    }
                "#}
            </style>
        </nav>
    }
}
