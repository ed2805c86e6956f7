//! # client
//!
//! Leptos frontend for the resume analyzer. Rendered on the server by the
//! `server` crate and hydrated in the browser from the same components.
//!
//! This crate contains pages, components, session and page state, the typed
//! backend client, and the session gate that guards protected routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
