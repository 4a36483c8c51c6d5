use yew::prelude::*;

mod components;
mod config;
mod content;
mod dashboard;
mod error;
mod pages;
mod state;
mod utils;

use pages::portfolio::Portfolio;

#[function_component(App)]
fn app() -> Html {
    html! { <Portfolio /> }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    utils::dom::install_error_logger();

    log::info!("Starting portfolio frontend");
    yew::Renderer::<App>::new().render();
}
