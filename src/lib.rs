//! # taskmanager-client
//!
//! Leptos + WASM frontend for the task manager: login, dashboard, task
//! lists and details, team roster, and trash.
//!
//! The route guard, sidebar transition controller, form rules, and data
//! stores are plain Rust under `state/` and `form/`; `components/` and
//! `pages/` are thin reactive views over them.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;
pub mod util;

/// Browser entry point: install panic and log hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
