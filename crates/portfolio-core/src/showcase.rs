//! Showcase state: the project modal, the lightbox and the page scroll lock
//! they share.
//!
//! Keyboard and backdrop events are routed here so only the topmost overlay
//! reacts to them.

use crate::config::SiteConfig;
use crate::error::PortfolioResult;
use crate::lightbox::Lightbox;
use crate::modal::{ModalController, ModalHeader};
use crate::scroll_lock::ScrollLock;
use crate::tabs::TabTransition;
use crate::types::ResolvedProject;

/// Keys the overlays respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl OverlayKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(OverlayKey::Escape),
            "ArrowLeft" => Some(OverlayKey::ArrowLeft),
            "ArrowRight" => Some(OverlayKey::ArrowRight),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ShowcaseState {
    pub modal: ModalController,
    pub lightbox: Lightbox,
    lock: ScrollLock,
    /// Latest card click; only its result may open the modal
    request: u64,
}

impl ShowcaseState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            modal: ModalController::new(config),
            lightbox: Lightbox::new(),
            lock: ScrollLock::new(),
            request: 0,
        }
    }

    pub fn open_modal(
        &mut self,
        header: ModalHeader,
        project: ResolvedProject,
    ) -> PortfolioResult<()> {
        self.modal.open(header, project, &mut self.lock)
    }

    /// Record a card click and return its request number
    pub fn begin_request(&mut self) -> u64 {
        self.request += 1;
        self.request
    }

    pub fn latest_request(&self) -> u64 {
        self.request
    }

    /// Show the resolved project for card click `request`.
    ///
    /// Returns `Ok(false)` and changes nothing if a newer click has been made
    /// since. The latest result replaces whatever the modal is showing.
    pub fn open_requested(
        &mut self,
        request: u64,
        header: ModalHeader,
        project: ResolvedProject,
    ) -> PortfolioResult<bool> {
        if request != self.request {
            tracing::debug!(
                project = %header.project_id,
                request,
                latest = self.request,
                "Dropping superseded project result"
            );
            return Ok(false);
        }
        if self.modal.is_open() {
            self.close_modal();
        }
        self.open_modal(header, project)?;
        Ok(true)
    }

    /// Close the modal, and the lightbox with it if it was left open
    pub fn close_modal(&mut self) -> bool {
        if self.lightbox.is_open() {
            self.lightbox.close(&mut self.lock);
        }
        self.modal.close(&mut self.lock)
    }

    pub fn switch_tab(&mut self, tab_id: &str) -> Option<TabTransition> {
        self.modal.switch_tab(tab_id)
    }

    /// Open the lightbox on the open modal's gallery
    pub fn open_lightbox_at(&mut self, index: usize) -> PortfolioResult<()> {
        let images = self
            .modal
            .view()
            .map(|v| v.gallery.images().to_vec())
            .unwrap_or_default();
        self.lightbox.open(images, index, &mut self.lock)
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close(&mut self.lock);
    }

    /// Route a key press to the topmost overlay. Returns whether it was used.
    pub fn handle_key(&mut self, key: OverlayKey) -> bool {
        if self.lightbox.is_open() {
            match key {
                OverlayKey::Escape => self.close_lightbox(),
                OverlayKey::ArrowLeft => self.lightbox.prev(),
                OverlayKey::ArrowRight => self.lightbox.next(),
            }
            return true;
        }
        if key == OverlayKey::Escape && self.modal.is_open() {
            return self.close_modal();
        }
        false
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ProjectCard;
    use crate::types::ScreenshotRef;

    fn header(id: &str) -> ModalHeader {
        ModalHeader::from_card(&ProjectCard {
            project_id: Some(id.into()),
            title: "Ember".into(),
            banner_src: "banner.gif".into(),
            engine: "Godot".into(),
        })
        .unwrap()
    }

    fn open_state() -> ShowcaseState {
        let mut state = ShowcaseState::new(&SiteConfig::default());
        let header = header("ember");
        let project = ResolvedProject::new(
            Vec::new(),
            vec![
                ScreenshotRef::Locator("1.png".into()),
                ScreenshotRef::Locator("2.png".into()),
            ],
        );
        state.open_modal(header, project).unwrap();
        state
    }

    #[test]
    fn dom_key_mapping() {
        assert_eq!(OverlayKey::from_dom_key("Escape"), Some(OverlayKey::Escape));
        assert_eq!(OverlayKey::from_dom_key("ArrowRight"), Some(OverlayKey::ArrowRight));
        assert_eq!(OverlayKey::from_dom_key("Enter"), None);
    }

    #[test]
    fn escape_closes_topmost_overlay_first() {
        let mut state = open_state();
        state.open_lightbox_at(1).unwrap();

        assert!(state.handle_key(OverlayKey::Escape));
        assert!(!state.lightbox.is_open());
        assert!(state.modal.is_open());
        assert!(state.scroll_lock().is_locked());

        assert!(state.handle_key(OverlayKey::Escape));
        assert!(!state.modal.is_open());
        assert!(!state.scroll_lock().is_locked());

        assert!(!state.handle_key(OverlayKey::Escape));
    }

    #[test]
    fn arrows_only_drive_an_open_lightbox() {
        let mut state = open_state();
        assert!(!state.handle_key(OverlayKey::ArrowRight));

        state.open_lightbox_at(0).unwrap();
        state.handle_key(OverlayKey::ArrowLeft);
        assert_eq!(state.lightbox.index(), 2);
        state.handle_key(OverlayKey::ArrowRight);
        assert_eq!(state.lightbox.index(), 0);
    }

    #[test]
    fn closing_modal_releases_both_claims() {
        let mut state = open_state();
        state.open_lightbox_at(0).unwrap();

        assert!(state.close_modal());
        assert!(!state.lightbox.is_open());
        assert!(!state.scroll_lock().is_locked());
    }

    #[test]
    fn lightbox_needs_an_open_modal() {
        let mut state = ShowcaseState::new(&SiteConfig::default());
        assert!(state.open_lightbox_at(0).is_err());
        assert!(!state.scroll_lock().is_locked());
    }

    #[test]
    fn superseded_request_is_dropped() {
        let mut state = ShowcaseState::new(&SiteConfig::default());
        let first = state.begin_request();
        let second = state.begin_request();
        assert_eq!(state.latest_request(), second);

        let opened = state
            .open_requested(first, header("first"), ResolvedProject::default_project())
            .unwrap();
        assert!(!opened);
        assert!(!state.modal.is_open());
        assert!(!state.scroll_lock().is_locked());

        assert!(state
            .open_requested(second, header("second"), ResolvedProject::default_project())
            .unwrap());
        assert_eq!(state.modal.view().unwrap().header.project_id, "second");
    }

    #[test]
    fn latest_request_replaces_open_modal() {
        let mut state = open_state();
        state.open_lightbox_at(0).unwrap();
        let session = state.modal.session();

        let request = state.begin_request();
        assert!(state
            .open_requested(request, header("other"), ResolvedProject::default_project())
            .unwrap());

        assert_eq!(state.modal.view().unwrap().header.project_id, "other");
        assert_eq!(state.modal.session(), session + 1);
        assert!(!state.lightbox.is_open());
        assert!(state.scroll_lock().holds(crate::scroll_lock::LockHolder::Modal));
    }
}
