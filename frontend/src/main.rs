use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod toast;
mod viewport;
mod nav {
    pub mod error;
    pub mod section;
    pub mod state;
    pub mod controller;
}
mod contact {
    pub mod form;
    pub mod sink;
    pub mod submit;
}
mod components {
    pub mod icon;
    pub mod notification;
}
mod sections {
    pub mod progress_bar;
    pub mod nav_bar;
    pub mod hero;
    pub mod membership;
    pub mod videos;
    pub mod story;
    pub mod difference;
    pub mod contact;
    pub mod footer;
    pub mod membership_dialog;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;



#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
