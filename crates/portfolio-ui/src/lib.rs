//! Portfolio Showcase UI Components
//!
//! Small Dioxus widgets shared by the project modal and the lightbox.

pub mod components;

pub use components::*;
