//! # ecoverify
//!
//! Leptos + WASM single-page application for supply-chain sustainability
//! verification: supplier records, sustainability metrics, verification
//! activity feeds, admin screens, and per-user verification documents
//! backed by a managed auth/storage service.
//!
//! The crate compiles natively without the `csr` feature so state machines
//! and collaborator flows run under plain `cargo test`; browser-only code
//! (HTTP, localStorage, DOM) is feature-gated with inert native stubs.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point, invoked by the wasm loader after instantiation.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
