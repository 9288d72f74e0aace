//! # taskcrm
//!
//! Leptos + WASM single-page dashboard for the Task & CRM backend.
//! Fetches tasks, contacts, and deals from the REST API, groups tasks into
//! to-do / in-progress / done buckets, and renders stats, a kanban board,
//! and short CRM lists.
//!
//! This crate contains the page, components, application state, network
//! types, and the REST fetch helpers. Browser-only dependencies are gated
//! behind the `csr` feature so the aggregation logic compiles and tests
//! natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire up console logging,
/// and mount the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
