//! Reusable UI components
//!
//! Class names match the site stylesheet (`close-modal`, `lightbox-nav`,
//! `engine-badge-modal`).

mod button;
mod engine_badge;

pub use button::*;
pub use engine_badge::*;
