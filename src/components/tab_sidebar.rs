//! Floating Tab Sidebar Component
//!
//! Mirrors the modal's tab buttons at the left edge of the modal content
//! once the primary tab bar scrolls out of view.

use dioxus::prelude::*;
use portfolio_core::{ShowcaseState, SiteConfig, TabSidebar};

use crate::components::tab_panel::{activate_tab, TAB_BAR_ID};
use crate::context::{use_showcase, use_site_config, MODAL_CONTENT_ID};
use crate::dom::{self, IntersectionSubscription, WindowListener};

pub const SIDEBAR_ID: &str = "modalTabsSidebar";

/// Re-measure and hand geometry to the sidebar state
fn measure(mut showcase: Signal<ShowcaseState>, intersecting: Option<bool>) {
    let viewport = dom::viewport();
    let content = dom::rect(MODAL_CONTENT_ID).unwrap_or_default();
    let size = dom::size(SIDEBAR_ID);

    let mut state = showcase.write();
    let sidebar = state.modal.sidebar_mut();
    match intersecting {
        Some(intersecting) => {
            sidebar.on_tab_bar_intersection(intersecting, viewport, content, size)
        }
        None => sidebar.on_resize(viewport, content, size),
    }
}

/// Start observing the tab bar for the modal session `session`.
///
/// Anything held from an earlier session is released first. Does nothing if
/// the modal has since closed or been reopened.
pub fn setup_tab_sidebar(mut showcase: Signal<ShowcaseState>, config: &SiteConfig, session: u64) {
    {
        let state = showcase.peek();
        if !state.modal.is_open() || state.modal.session() != session {
            return;
        }
    }

    let enabled = showcase.write().modal.sidebar_mut().begin(dom::viewport());
    if !enabled {
        tracing::debug!("Compact viewport; floating tab sidebar disabled");
        return;
    }

    match IntersectionSubscription::observe(
        TAB_BAR_ID,
        &config.tab_bar_root_margin,
        config.tab_bar_threshold,
        move |intersecting| measure(showcase, Some(intersecting)),
    ) {
        Ok(observer) => showcase.write().modal.sidebar_mut().attach(Box::new(observer)),
        Err(e) => tracing::warn!("Tab bar observer unavailable: {}", e),
    }

    match WindowListener::new("resize", move |_| measure(showcase, None)) {
        Ok(listener) => showcase.write().modal.sidebar_mut().attach(Box::new(listener)),
        Err(e) => tracing::warn!("Resize listener unavailable: {}", e),
    }

    measure(showcase, None);
}

/// Floating navigation list
#[component]
pub fn TabSidebarNav() -> Element {
    let showcase = use_showcase();
    let config = use_site_config();

    let state = showcase.read();
    let sidebar = state.modal.sidebar();
    let entries = state
        .modal
        .view()
        .map(|v| TabSidebar::entries(&v.tabs))
        .unwrap_or_default();

    rsx! {
        aside {
            id: SIDEBAR_ID,
            class: sidebar.class(),
            style: sidebar.style(),

            h4 { "Navigation" }

            for entry in entries {
                {
                    let tab_id = entry.tab_id.clone();
                    let config = config.clone();
                    rsx! {
                        button {
                            key: "{entry.tab_id}",
                            class: if entry.active {
                                "modal-tab-sidebar-button active"
                            } else {
                                "modal-tab-sidebar-button"
                            },
                            "data-tab": "{entry.tab_id}",
                            title: "{entry.label}",
                            onclick: move |_| activate_tab(showcase, &config, &tab_id),
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}
