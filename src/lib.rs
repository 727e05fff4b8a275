//! # mycity-portal
//!
//! Leptos + WASM single-page demo for municipal services ("MyCity"):
//! four view panels with lazily mounted Leaflet maps and Chart.js charts,
//! plus simulated issue-reporting, tracking, and polling flows. Entirely
//! client-side; nothing is persisted and no network calls are made beyond
//! the CDN widget scripts in `index.html`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
pub mod vendor;

/// Browser entry point: mounts the app onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
