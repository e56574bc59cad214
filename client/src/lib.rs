//! # taskdesk-client
//!
//! Leptos + WASM frontend for the taskdesk to-do manager: login, signup and a
//! task table backed by a remote REST API.
//!
//! The crate is compiled twice. With `hydrate` it becomes the browser bundle
//! (real HTTP via `gloo-net`, token persistence in `localStorage`); with `ssr`
//! it is linked into the host binary, which renders the page shells.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
