//! # client
//!
//! Leptos + WASM frontend for the event registration console: the public
//! event listing with self-service signup, and the administrator dashboard
//! for managing events and registrations.
//!
//! Pages and components render state held in per-domain `RwSignal` stores
//! (`state`). Async workflows in `actions` call the external REST API through
//! `net::api` and settle those stores.

pub mod actions;
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
