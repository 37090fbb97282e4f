//! Floating Tab Sidebar
//!
//! When the modal's tab bar scrolls out of view, a compact copy of the tab
//! list floats to the left of the modal content. Compact viewports never
//! show it, whatever the observers report.

use crate::config::SiteConfig;
use crate::subscription::{Subscription, SubscriptionSet};
use crate::tabs::TabSet;

/// Viewport dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// A bounding client rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rendered size of the sidebar itself
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Absolute placement of the sidebar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarPosition {
    pub left: f64,
    pub top: f64,
}

/// One mirrored tab button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub tab_id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug)]
pub struct TabSidebar {
    compact_max_width: f64,
    min_top: f64,
    enabled: bool,
    visible: bool,
    position: Option<SidebarPosition>,
    subscriptions: SubscriptionSet,
}

impl TabSidebar {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            compact_max_width: config.compact_max_width,
            min_top: config.sidebar_min_top,
            enabled: false,
            visible: false,
            position: None,
            subscriptions: SubscriptionSet::new(),
        }
    }

    fn is_compact(&self, viewport: Viewport) -> bool {
        viewport.width <= self.compact_max_width
    }

    /// Start a fresh session for a newly opened modal.
    ///
    /// Releases everything held from a previous opening. Returns whether the
    /// sidebar is enabled, i.e. whether observers should be attached.
    pub fn begin(&mut self, viewport: Viewport) -> bool {
        self.teardown();
        self.enabled = !self.is_compact(viewport);
        self.enabled
    }

    /// Hold an observer or listener until teardown.
    ///
    /// A disabled sidebar releases it straight away.
    pub fn attach(&mut self, mut subscription: Box<dyn Subscription>) {
        if self.enabled {
            self.subscriptions.push(subscription);
        } else {
            subscription.unsubscribe();
        }
    }

    /// React to the primary tab bar entering or leaving the viewport
    pub fn on_tab_bar_intersection(
        &mut self,
        intersecting: bool,
        viewport: Viewport,
        content: Rect,
        sidebar: Size,
    ) {
        if self.is_compact(viewport) {
            self.disable();
            return;
        }
        self.enabled = true;

        if intersecting {
            self.visible = false;
            return;
        }

        self.position = Some(self.align(content, sidebar));
        // Would poke out past the left edge of the screen: stay hidden.
        self.visible = content.left - sidebar.width >= 0.0;
    }

    /// Re-check compact mode and re-align after a window resize
    pub fn on_resize(&mut self, viewport: Viewport, content: Rect, sidebar: Size) {
        if self.is_compact(viewport) {
            self.disable();
            return;
        }
        self.enabled = true;
        self.position = Some(self.align(content, sidebar));
        if self.visible {
            self.visible = content.left - sidebar.width >= 0.0;
        }
    }

    /// Place the sidebar just left of the content, vertically centered on it
    pub fn align(&self, content: Rect, sidebar: Size) -> SidebarPosition {
        let left = (content.left - sidebar.width).max(0.0);
        let top = content.top + content.height / 2.0 - sidebar.height / 2.0;
        SidebarPosition {
            left,
            top: top.max(self.min_top),
        }
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.visible = false;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hide and release every held subscription
    pub fn teardown(&mut self) {
        self.visible = false;
        self.subscriptions.release_all();
    }

    /// Mirrored entries for the current tab set
    pub fn entries(tabs: &TabSet) -> Vec<SidebarEntry> {
        tabs.tabs()
            .iter()
            .enumerate()
            .map(|(i, t)| SidebarEntry {
                tab_id: t.id.clone(),
                label: t.title.trim().to_string(),
                active: tabs.is_active(i),
            })
            .collect()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Option<SidebarPosition> {
        self.position
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// CSS classes for the sidebar container
    pub fn class(&self) -> String {
        let mut class = String::from("modal-tabs-sidebar");
        if self.visible {
            class.push_str(" show");
        }
        if !self.enabled {
            class.push_str(" is-disabled");
        }
        class
    }

    /// Inline style carrying the computed position
    pub fn style(&self) -> String {
        match self.position {
            Some(p) => format!("left: {}px; top: {}px;", p.left, p.top),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: Viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };
    const NARROW: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };
    const CONTENT: Rect = Rect {
        left: 400.0,
        top: 40.0,
        width: 1000.0,
        height: 900.0,
    };
    const SIDEBAR: Size = Size {
        width: 180.0,
        height: 200.0,
    };

    fn sidebar() -> TabSidebar {
        TabSidebar::new(&SiteConfig::default())
    }

    #[test]
    fn shows_when_tab_bar_leaves_viewport() {
        let mut sb = sidebar();
        assert!(sb.begin(WIDE));

        sb.on_tab_bar_intersection(false, WIDE, CONTENT, SIDEBAR);
        assert!(sb.is_visible());
        assert_eq!(
            sb.position(),
            Some(SidebarPosition {
                left: 220.0,
                top: 390.0
            })
        );
        assert_eq!(sb.class(), "modal-tabs-sidebar show");

        sb.on_tab_bar_intersection(true, WIDE, CONTENT, SIDEBAR);
        assert!(!sb.is_visible());
    }

    #[test]
    fn compact_viewport_overrides_everything() {
        let mut sb = sidebar();
        assert!(!sb.begin(NARROW));

        sb.on_tab_bar_intersection(false, NARROW, CONTENT, SIDEBAR);
        assert!(!sb.is_visible());
        assert!(!sb.is_enabled());
        assert_eq!(sb.class(), "modal-tabs-sidebar is-disabled");
    }

    #[test]
    fn going_compact_on_resize_hides() {
        let mut sb = sidebar();
        sb.begin(WIDE);
        sb.on_tab_bar_intersection(false, WIDE, CONTENT, SIDEBAR);
        assert!(sb.is_visible());

        sb.on_resize(NARROW, CONTENT, SIDEBAR);
        assert!(!sb.is_visible());
        assert!(!sb.is_enabled());
    }

    #[test]
    fn top_is_clamped() {
        let sb = sidebar();
        let short = Rect {
            left: 400.0,
            top: 0.0,
            width: 600.0,
            height: 100.0,
        };
        assert_eq!(sb.align(short, SIDEBAR).top, 8.0);
    }

    #[test]
    fn offscreen_left_suppresses_visibility() {
        let mut sb = sidebar();
        sb.begin(WIDE);
        let tight = Rect {
            left: 100.0,
            ..CONTENT
        };
        sb.on_tab_bar_intersection(false, WIDE, tight, SIDEBAR);
        assert!(!sb.is_visible());
        assert_eq!(sb.position().map(|p| p.left), Some(0.0));
    }

    #[test]
    fn resize_that_squeezes_content_hides() {
        let mut sb = sidebar();
        sb.begin(WIDE);
        sb.on_tab_bar_intersection(false, WIDE, CONTENT, SIDEBAR);
        assert!(sb.is_visible());

        let squeezed = Rect {
            left: 60.0,
            ..CONTENT
        };
        sb.on_resize(WIDE, squeezed, SIDEBAR);
        assert!(!sb.is_visible());

        // Room again, but only the tab bar observer may show it
        sb.on_resize(WIDE, CONTENT, SIDEBAR);
        assert!(!sb.is_visible());
        assert_eq!(sb.position().map(|p| p.left), Some(220.0));
    }
}
