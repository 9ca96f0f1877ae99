//! # client
//!
//! Leptos + WASM frontend for Baby Chat.
//!
//! This crate contains the routed pages, layout chrome, toast notifications,
//! the Messages view state, and the thin REST client used to reach the
//! backend. It is compiled with `hydrate` for the browser and with `ssr` for
//! the axum host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: applies the stored theme and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let dark = util::dark_mode::read_preference();
    util::dark_mode::apply(dark);

    log::info!("hydrating baby chat ({})", config::load_config().environment.as_str());
    leptos::mount::hydrate_body(app::App);
}
