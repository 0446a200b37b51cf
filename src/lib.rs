//! # vidhyardhi
//!
//! Leptos + WASM frontend for the Vidhyardhi educational consultancy portal.
//!
//! This crate contains the session store, route guards, route table, REST API
//! wrappers, compiled-in tutorial content, and the pages that render colleges,
//! roadmaps, exams and language tutorials. All data comes from an external REST
//! API; the only persistence is browser `localStorage`.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
