pub mod app;
pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod toast;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
