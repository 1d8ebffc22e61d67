//! PYQ Hub browser client.
//!
//! ARCHITECTURE
//! ============
//! `pyqhub` owns the auth form rules, session store, and menu state; this
//! crate renders them with Leptos and talks to the account service through
//! `net::api`. The `csr` feature builds the WASM entry point.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
