use yew::prelude::*;
use yew_router::prelude::*;

pub mod adapters;
pub mod api_client;
pub mod common;
mod components;
pub mod hooks;
pub mod mock_data;
mod pages;
pub mod settings;

use crate::common::toast::ToastProvider;
use pages::dashboard::DashboardPage;
use pages::news::NewsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/news")]
    News,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::News => {
            log::trace!("Rendering News page");
            html! { <NewsPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="min-h-screen bg-[#020617] text-slate-200 flex items-center justify-center">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                </div>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== AgriFlow Dashboard Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Tracking commodity: {}", settings.commodity);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
