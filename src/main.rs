//! Todo List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dom;
mod logging;
mod store;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::from_location();
    logging::init(config.log_level);
    log::info!("starting with {} renderer", config.variant.as_str());

    mount_to_body(move || view! { <App config=config /> });
}
