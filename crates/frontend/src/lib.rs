pub mod app;
pub mod domain;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::CatalogConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = CatalogConfig::from_location();
    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|err| {
        log::warn!("{}; using default configuration", err);
        CatalogConfig::default()
    });
    log::info!("Catalog endpoint: {}", config.endpoint);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
