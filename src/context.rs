//! Shared state provided to every component.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| repository);
//!
//! // In child components
//! let showcase = use_showcase();
//! let open = showcase.read().modal.is_open();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    ContentRepository, ModalHeader, ProjectCard, ResolvedProject, ScrollOffsets, ShowcaseState,
    SiteConfig,
};

use crate::dom;
use crate::fetch::HttpFetcher;

/// Repository published once the manifest has been fetched.
///
/// `None` until `load_manifest` completes; the repository is shared read-only
/// afterwards.
pub type SharedRepository = Signal<Option<Rc<ContentRepository<HttpFetcher>>>>;

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_repository() -> SharedRepository {
    use_context::<SharedRepository>()
}

/// Hook to access the modal/lightbox state.
pub fn use_showcase() -> Signal<ShowcaseState> {
    use_context::<Signal<ShowcaseState>>()
}

/// Push the scroll lock state to the page body
pub fn sync_scroll_lock(showcase: Signal<ShowcaseState>) {
    dom::set_body_overflow(showcase.peek().scroll_lock().overflow());
}

/// Modal scroll containers, reset on every open and close
pub const MODAL_CONTENT_ID: &str = "modalContent";
pub const MODAL_BODY_ID: &str = "modalBody";

/// Scroll the modal containers to the offsets the controller holds
pub fn apply_modal_scroll(showcase: Signal<ShowcaseState>) {
    let offsets = showcase.peek().modal.offsets();
    dom::set_scroll_top(MODAL_CONTENT_ID, offsets.content);
    dom::set_scroll_top(MODAL_BODY_ID, offsets.body);
}

/// Feed the containers' current scroll positions back to the controller
pub fn record_modal_scroll(mut showcase: Signal<ShowcaseState>) {
    let offsets = ScrollOffsets {
        content: dom::scroll_top(MODAL_CONTENT_ID),
        body: dom::scroll_top(MODAL_BODY_ID),
    };
    if showcase.peek().modal.offsets() != offsets {
        showcase.write().modal.set_offsets(offsets);
    }
}

/// Open the project modal for a clicked card.
///
/// Aborts before any state change if the card has no project id. The
/// project is resolved with every section fetched before the modal shows.
/// If another card is clicked while this one resolves, the later click wins.
pub async fn open_project(
    mut showcase: Signal<ShowcaseState>,
    repository: SharedRepository,
    card: ProjectCard,
) {
    let header = match ModalHeader::from_card(&card) {
        Ok(header) => header,
        Err(e) => {
            tracing::error!(title = %card.title, "{}", e);
            return;
        }
    };

    let request = showcase.write().begin_request();

    let repo = repository.peek().clone();
    let project = match repo {
        Some(repo) => repo.resolve_project(&header.project_id).await,
        None => {
            tracing::warn!(
                project = %header.project_id,
                "Manifest not loaded yet; showing default description"
            );
            ResolvedProject::default_project()
        }
    };

    let result = showcase.write().open_requested(request, header, project);
    match result {
        Ok(true) => {
            sync_scroll_lock(showcase);
            apply_modal_scroll(showcase);
        }
        Ok(false) => {}
        Err(e) => tracing::warn!("{}", e),
    }
}

pub fn close_project(mut showcase: Signal<ShowcaseState>) {
    if showcase.write().close_modal() {
        sync_scroll_lock(showcase);
        apply_modal_scroll(showcase);
    }
}
