//! # neetup-client
//!
//! Leptos + WASM frontend for the NeetUP career/education platform:
//! authentication, opportunity listings (jobs, courses, projects), the
//! personality test, community chat, and the dashboard.
//!
//! This crate contains pages, components, the domain-split state layer
//! with its persisted session slice, the REST client, and the opportunity
//! application flow. The backend is an external HTTP/JSON service.

pub mod app;
pub mod components;
pub mod flow;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
