//! Portfolio Showcase Core Library
//!
//! Content loading and presentation state for a portfolio site's project
//! detail modal, floating tab sidebar and image lightbox.
//!
//! ## Overview
//!
//! Nothing in this crate touches the DOM. Each component is a plain state
//! machine that the web front end drives and renders:
//!
//! - [`ContentRepository`] fetches the project manifest and resolves section
//!   bodies through a [`ContentFetcher`]
//! - [`ModalController`] owns the modal's Closed/Open lifecycle
//! - [`TabSet`] keeps exactly one section tab active
//! - [`TabSidebar`] decides when the floating tab list is shown and where
//! - [`Lightbox`] is an indexed, wrapping image carousel
//! - [`ShowcaseState`] ties them together around one [`ScrollLock`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContentRepository, ModalHeader, ProjectCard, ShowcaseState, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut repo = ContentRepository::new(fetcher, &config);
//! repo.load_manifest().await;
//!
//! let header = ModalHeader::from_card(&card)?;
//! let project = repo.resolve_project(&header.project_id).await;
//!
//! let mut showcase = ShowcaseState::new(&config);
//! showcase.open_modal(header, project)?;
//! ```

pub mod config;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod modal;
pub mod particles;
pub mod repository;
pub mod scroll_lock;
pub mod showcase;
pub mod sidebar;
pub mod subscription;
pub mod tabs;
pub mod types;

// Re-exports
pub use config::SiteConfig;
pub use error::{PortfolioError, PortfolioResult};
pub use gallery::{GridItem, ScreenshotGallery};
pub use lightbox::Lightbox;
pub use modal::{
    engine_icon, ModalController, ModalHeader, ModalState, ModalView, ProjectCard, ScrollOffsets,
};
pub use particles::{Particle, ParticleKind};
pub use repository::{ContentFetcher, ContentRepository, ManifestStatus};
pub use scroll_lock::{LockHolder, ScrollLock};
pub use showcase::{OverlayKey, ShowcaseState};
pub use sidebar::{Rect, SidebarEntry, SidebarPosition, Size, TabSidebar, Viewport};
pub use subscription::{Subscription, SubscriptionSet};
pub use tabs::{pane_dom_id, pane_scroll_top, SlideDirection, TabSet, TabTransition};
pub use types::*;
