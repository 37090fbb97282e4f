//! Site configuration.
//!
//! All tunables live in one [`SiteConfig`] so the web app and the CLI agree
//! on locations and thresholds. Every field has a default; a JSON document
//! may override any subset of them.

use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

/// Default manifest location, relative to the site root
pub const DEFAULT_MANIFEST_URL: &str = "data/projects.json";

/// Viewports at or below this width are in compact mode (no floating sidebar)
pub const DEFAULT_COMPACT_MAX_WIDTH: f64 = 1400.0;

/// The floating sidebar never renders above this top offset
pub const DEFAULT_SIDEBAR_MIN_TOP: f64 = 8.0;

/// Gap kept between the modal's visible top edge and an activated pane
pub const DEFAULT_PANE_SCROLL_OFFSET: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the project manifest is fetched from
    pub manifest_url: String,
    /// Compact-mode threshold in CSS pixels
    pub compact_max_width: f64,
    /// Minimum top offset of the floating sidebar
    pub sidebar_min_top: f64,
    /// Offset used when scrolling the modal to an activated pane
    pub pane_scroll_offset: f64,
    /// Duration of the tab slide transition
    pub tab_transition_ms: u32,
    /// Delay between the modal opening and the sidebar observing the tab bar
    pub sidebar_setup_delay_ms: u32,
    /// Intersection threshold for the modal's tab bar
    pub tab_bar_threshold: f64,
    /// Root margin for the modal's tab bar observer
    pub tab_bar_root_margin: String,
    /// Intersection threshold for card fade-in
    pub reveal_threshold: f64,
    /// Root margin for card fade-in
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            compact_max_width: DEFAULT_COMPACT_MAX_WIDTH,
            sidebar_min_top: DEFAULT_SIDEBAR_MIN_TOP,
            pane_scroll_offset: DEFAULT_PANE_SCROLL_OFFSET,
            tab_transition_ms: 50,
            sidebar_setup_delay_ms: 100,
            tab_bar_threshold: 0.1,
            tab_bar_root_margin: "60px 0px 0px 0px".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override document
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the manifest location
    pub fn with_manifest_url(mut self, url: impl Into<String>) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// Whether a viewport of this width is in compact mode
    pub fn is_compact(&self, viewport_width: f64) -> bool {
        viewport_width <= self.compact_max_width
    }
}
