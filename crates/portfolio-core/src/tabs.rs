//! Tab Switching Subsystem
//!
//! One tab button and one content pane per resolved section. Exactly one
//! tab is active at any time; the first is active when the set is built.

use crate::types::{ResolvedProject, ResolvedSection};

/// Direction of the transient slide played when the active tab changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

impl SlideDirection {
    /// Decide direction from the previous and new tab indices
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }

    /// CSS class applied to the panes during the transition
    pub fn class(&self) -> &'static str {
        match self {
            SlideDirection::Forward => "slide-right",
            SlideDirection::Backward => "slide-left",
        }
    }
}

/// A tab change in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTransition {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<ResolvedSection>,
    active: usize,
    transition: Option<TabTransition>,
}

impl TabSet {
    pub fn from_project(project: &ResolvedProject) -> Self {
        Self {
            tabs: project.sections().to_vec(),
            active: 0,
            transition: None,
        }
    }

    /// Activate the tab with `tab_id`.
    ///
    /// Returns `None` without changing anything if no tab has that id.
    pub fn switch_to(&mut self, tab_id: &str) -> Option<TabTransition> {
        let to = self.tabs.iter().position(|t| t.id == tab_id)?;
        let transition = TabTransition {
            from: self.active,
            to,
            direction: SlideDirection::between(self.active, to),
        };
        tracing::debug!(
            from = self.active,
            to,
            direction = transition.direction.class(),
            "Switch tab"
        );
        self.active = to;
        self.transition = Some(transition);
        Some(transition)
    }

    /// Force the first tab active, discarding any transition
    pub fn activate_first(&mut self) {
        self.active = 0;
        self.transition = None;
    }

    /// Clear the slide classes once the transition has played
    pub fn finish_transition(&mut self) {
        self.transition = None;
    }

    pub fn tabs(&self) -> &[ResolvedSection] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.tabs.get(self.active).map(|t| t.id.as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn transition(&self) -> Option<TabTransition> {
        self.transition
    }

    /// CSS classes for the button at `index`
    pub fn button_class(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "tab-button active"
        } else {
            "tab-button"
        }
    }

    /// CSS classes for the pane at `index`, including any slide in progress
    pub fn pane_class(&self, index: usize) -> String {
        let mut class = String::from("tab-pane");
        if self.is_active(index) {
            class.push_str(" active");
        }
        if let Some(t) = self.transition {
            if index == t.from || index == t.to {
                class.push(' ');
                class.push_str(t.direction.class());
            }
        }
        class
    }
}

/// DOM id of the pane for a section
pub fn pane_dom_id(tab_id: &str) -> String {
    format!("tab-pane-{}", tab_id)
}

/// Scroll offset that puts a pane's top just below the container's top edge
pub fn pane_scroll_top(container_top: f64, pane_top: f64, current_scroll: f64, offset: f64) -> f64 {
    (pane_top - container_top) + current_scroll - offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResolvedSection;

    fn three_tabs() -> TabSet {
        let project = ResolvedProject::new(
            vec![
                ResolvedSection::loaded("overview", "Overview", "<p>o</p>"),
                ResolvedSection::loaded("features", "Features", "<p>f</p>"),
                ResolvedSection::loaded("tech", "Tech", "<p>t</p>"),
            ],
            Vec::new(),
        );
        TabSet::from_project(&project)
    }

    #[test]
    fn first_tab_starts_active() {
        let tabs = three_tabs();
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs.active_id(), Some("overview"));
        assert_eq!(tabs.button_class(0), "tab-button active");
        assert_eq!(tabs.pane_class(1), "tab-pane");
    }

    #[test]
    fn switch_forward_then_backward() {
        let mut tabs = three_tabs();

        let t = tabs.switch_to("tech").unwrap();
        assert_eq!((t.from, t.to), (0, 2));
        assert_eq!(t.direction, SlideDirection::Forward);
        assert_eq!(tabs.pane_class(2), "tab-pane active slide-right");
        assert_eq!(tabs.pane_class(0), "tab-pane slide-right");

        let t = tabs.switch_to("features").unwrap();
        assert_eq!(t.direction, SlideDirection::Backward);
        tabs.finish_transition();
        assert_eq!(tabs.pane_class(1), "tab-pane active");
    }

    #[test]
    fn reselecting_active_tab_slides_backward() {
        let mut tabs = three_tabs();
        let t = tabs.switch_to("overview").unwrap();
        assert_eq!(t.direction, SlideDirection::Backward);
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn unknown_tab_is_noop() {
        let mut tabs = three_tabs();
        tabs.switch_to("features");
        tabs.finish_transition();

        assert!(tabs.switch_to("missing").is_none());
        assert_eq!(tabs.active_id(), Some("features"));
        assert!(tabs.transition().is_none());
    }

    #[test]
    fn scroll_target_keeps_offset() {
        // Pane sits 300px below the container top, container already scrolled 120px.
        assert_eq!(pane_scroll_top(100.0, 400.0, 120.0, 16.0), 404.0);
        assert_eq!(pane_dom_id("features"), "tab-pane-features");
    }
}
