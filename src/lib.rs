//! # kanban-client
//!
//! Leptos + WASM frontend for a single-page kanban task board.
//!
//! Tasks live in a remote collection store reached over plain HTTP/JSON
//! (list/create/update/delete). This crate contains the board page, the
//! task form and column components, application state with pure reducers,
//! the REST client, and the self-expiring toast queue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
