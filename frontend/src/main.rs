use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod content;
    pub mod landing;
}
mod utils {
    pub mod navigation;
}
mod waitlist {
    pub mod form;
    pub mod state;
    pub mod validation;
}

use components::notification::ToastProvider;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        // Single page site, anything else goes back to the landing page
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    info!("Starting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
