#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod fetch;
mod pages;
mod theme;

use tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        // Logging is best-effort in the browser; keep going without it
        web_sys::console::warn_1(&format!("Failed to initialize logging: {}", e).into());
    }

    tracing::info!("Starting portfolio showcase");

    dioxus::launch(app::App);
}
