use yew::prelude::*;

/// Inline stroke icons used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Calendar,
    CheckCircle,
    ChevronDown,
    Close,
    Crown,
    Globe,
    Mail,
    Menu,
    Play,
    Sparkles,
    Target,
    TrendingUp,
    Trophy,
    Unlock,
    Users,
}

impl Icon {
    fn shapes(self) -> Html {
        match self {
            Icon::Calendar => html! {
                <>
                    <rect x="3" y="4" width="18" height="18" rx="2" />
                    <path d="M16 2v4M8 2v4M3 10h18" />
                </>
            },
            Icon::CheckCircle => html! {
                <>
                    <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                    <path d="m9 11 3 3L22 4" />
                </>
            },
            Icon::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
            Icon::Close => html! { <path d="M18 6 6 18M6 6l12 12" /> },
            Icon::Crown => html! { <path d="M2 4l3 12h14l3-12-6 7-4-7-4 7-6-7zM5 20h14" /> },
            Icon::Globe => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
                </>
            },
            Icon::Mail => html! {
                <>
                    <rect x="2" y="4" width="20" height="16" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            Icon::Menu => html! { <path d="M4 6h16M4 12h16M4 18h16" /> },
            Icon::Play => html! { <path d="M6 3l14 9-14 9V3z" /> },
            Icon::Sparkles => html! { <path d="M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z" /> },
            Icon::Target => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
            Icon::TrendingUp => html! { <path d="M22 7l-8.5 8.5-5-5L2 17M16 7h6v6" /> },
            Icon::Trophy => html! {
                <path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6M18 9h1.5a2.5 2.5 0 0 0 0-5H18M4 22h16M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22M18 2H6v7a6 6 0 0 0 12 0V2z" />
            },
            Icon::Unlock => html! {
                <>
                    <rect x="3" y="11" width="18" height="11" rx="2" />
                    <path d="M7 11V7a5 5 0 0 1 9.9-1" />
                </>
            },
            Icon::Users => html! {
                <>
                    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75" />
                    <circle cx="9" cy="7" r="4" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { props.icon.shapes() }
        </svg>
    }
}
