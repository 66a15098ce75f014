//! # studio-fx
//!
//! Interaction effects for the studio's marketing site, compiled to
//! WebAssembly and attached to server-rendered markup.
//!
//! Each widget is independent: it looks up the elements it needs, stays inert
//! when they are missing, and reacts to one kind of browser event. The only
//! state shared between widgets lives in [`controller::UiController`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cursor`] | Custom cursor and pointer-driven background colour |
//! | [`navbar`] | Hide the navbar while scrolling down |
//! | [`counter`] | Bounded, cancellable number counter animation |
//! | [`reveal`] | One-shot reveal on visibility and the counter trigger |
//! | [`filter`] | Project category filter buttons |
//! | [`parallax`] | Damped parallax offset for the studio image |
//! | [`slider`] | Budget slider bubble with rupee formatting |
//! | [`inquiry`] | Simulated inquiry form submission |
//! | [`menu`] | Mobile menu dropdown toggle |
//! | [`projects`] | Card click-through and hover background |
//! | [`controller`] | Shared UI state |
//! | [`config`] | Runtime tuning loaded from the page |
//! | [`consts`] | DOM contract and default values |
//!
//! Browser bindings sit behind the `hydrate` feature; without it the crate
//! builds natively and exposes only the pure logic.

pub mod config;
pub mod consts;
pub mod controller;
pub mod counter;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod inquiry;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod projects;
pub mod reveal;
pub mod slider;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("studio-fx: logger unavailable: {err}").into());
    }
    dom::report("studio-fx", app::run_when_ready());
}
