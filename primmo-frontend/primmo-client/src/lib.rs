#![recursion_limit = "256"]

use wasm_bindgen::prelude::wasm_bindgen;

use primmo_app::App;

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("hydrate mode - hydrating");

    leptos::mount::hydrate_body(App);
}
