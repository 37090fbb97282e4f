//! Modal Presentation Controller
//!
//! Two states, Closed and Open. Header fields come from the project card
//! that was clicked; the body comes from the resolved project.
//!
//! ```text
//!            open(header, project)
//!   Closed ─────────────────────────▶ Open
//!     ▲                                 │
//!     └──────────── close() ────────────┘
//! ```

use crate::config::SiteConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::gallery::ScreenshotGallery;
use crate::scroll_lock::{LockHolder, ScrollLock};
use crate::sidebar::TabSidebar;
use crate::tabs::{TabSet, TabTransition};
use crate::types::ResolvedProject;

/// Engine whose icon does not follow the `white<engine>.svg` naming
const FRIENDSHIP_ENGINE: &str = "FriendshipEngine";

/// Icon asset for an engine badge
pub fn engine_icon(engine: &str) -> String {
    if engine == FRIENDSHIP_ENGINE {
        "assets/icons/friendshiplogo.svg".to_string()
    } else {
        format!("assets/icons/white{}.svg", engine.to_lowercase())
    }
}

/// What a project card exposes to the modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectCard {
    pub project_id: Option<String>,
    pub title: String,
    pub banner_src: String,
    pub engine: String,
}

/// Validated header fields for an opening modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalHeader {
    pub project_id: String,
    pub title: String,
    pub banner_src: String,
    pub engine: String,
    pub engine_icon: String,
}

impl ModalHeader {
    /// Read header fields off a card. Fails if the card has no project id.
    pub fn from_card(card: &ProjectCard) -> PortfolioResult<Self> {
        let project_id = card
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(PortfolioError::MissingIdentifier)?;

        Ok(Self {
            project_id: project_id.to_string(),
            title: card.title.clone(),
            banner_src: card.banner_src.clone(),
            engine: card.engine.clone(),
            engine_icon: engine_icon(&card.engine),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Scroll positions of the modal's scroll containers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffsets {
    pub content: f64,
    pub body: f64,
}

impl ScrollOffsets {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zero(&self) -> bool {
        self.content == 0.0 && self.body == 0.0
    }
}

/// Everything the open modal renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub header: ModalHeader,
    pub tabs: TabSet,
    pub gallery: ScreenshotGallery,
}

#[derive(Debug)]
pub struct ModalController {
    state: ModalState,
    view: Option<ModalView>,
    offsets: ScrollOffsets,
    sidebar: TabSidebar,
    /// Bumped on every successful open so observers can tell sessions apart
    session: u64,
}

impl ModalController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            state: ModalState::Closed,
            view: None,
            offsets: ScrollOffsets::default(),
            sidebar: TabSidebar::new(config),
            session: 0,
        }
    }

    /// Show a resolved project. Valid only while Closed.
    pub fn open(
        &mut self,
        header: ModalHeader,
        project: ResolvedProject,
        lock: &mut ScrollLock,
    ) -> PortfolioResult<()> {
        if self.state == ModalState::Open {
            return Err(PortfolioError::InvalidTransition(format!(
                "modal already open, cannot open '{}'",
                header.project_id
            )));
        }

        self.offsets.reset();

        let mut tabs = TabSet::from_project(&project);
        tabs.activate_first();
        let gallery =
            ScreenshotGallery::build(&header.title, &header.banner_src, project.screenshots());

        tracing::info!(
            project = %header.project_id,
            tabs = tabs.len(),
            images = gallery.images().len(),
            "Opening project modal"
        );

        self.view = Some(ModalView {
            header,
            tabs,
            gallery,
        });
        self.state = ModalState::Open;
        self.session += 1;
        lock.acquire(LockHolder::Modal);
        Ok(())
    }

    /// Close the modal. Returns false if it was not open.
    pub fn close(&mut self, lock: &mut ScrollLock) -> bool {
        if self.state != ModalState::Open {
            return false;
        }
        self.state = ModalState::Closed;
        lock.release(LockHolder::Modal);
        self.offsets.reset();
        self.sidebar.teardown();
        self.view = None;
        tracing::debug!("Project modal closed");
        true
    }

    /// Activate a tab in the open modal
    pub fn switch_tab(&mut self, tab_id: &str) -> Option<TabTransition> {
        self.view.as_mut()?.tabs.switch_to(tab_id)
    }

    pub fn finish_tab_transition(&mut self) {
        if let Some(view) = self.view.as_mut() {
            view.tabs.finish_transition();
        }
    }

    /// Record scroll positions reported by the DOM
    pub fn set_offsets(&mut self, offsets: ScrollOffsets) {
        self.offsets = offsets;
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    pub fn sidebar(&self) -> &TabSidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut TabSidebar {
        &mut self.sidebar
    }

    pub fn session(&self) -> u64 {
        self.session
    }
}
