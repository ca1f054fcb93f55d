//! # client
//!
//! Leptos + WASM frontend for the leads CRM: public landing page with the
//! contact form, login screen, authenticated lead dashboard and terms page.
//!
//! Derivation logic (filtering, pagination, summaries, session and form state
//! machines) lives in the `leads` crate; this crate wires it to reactive
//! signals, the browser HTTP client and `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
