//! # viewer
//!
//! Leptos + WASM frontend for the League of Legends patch-note summaries.
//!
//! The crate holds the pure bundle content model (`content`), the API client
//! and wire types (`net`), reactive state (`state`), and the pages and
//! components that render a bundle as tabbed, collapsible cards. It is built
//! twice: with `ssr` for server rendering and with `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
