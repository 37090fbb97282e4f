//! Tab Panel Component
//!
//! Tab buttons and content panes for the open project.

use dioxus::prelude::*;
use gloo::timers::callback::Timeout;
use portfolio_core::{pane_dom_id, pane_scroll_top, ShowcaseState, SiteConfig, TabSet};

use crate::context::{use_showcase, use_site_config, MODAL_CONTENT_ID};
use crate::dom;

/// Id of the primary tab bar, watched by the floating sidebar
pub const TAB_BAR_ID: &str = "modalTabButtons";

/// Activate a tab, then play the slide and scroll its pane into place.
///
/// Used by both the tab bar and the floating sidebar. Unknown ids are ignored.
pub fn activate_tab(mut showcase: Signal<ShowcaseState>, config: &SiteConfig, tab_id: &str) {
    if showcase.write().switch_tab(tab_id).is_none() {
        return;
    }

    let pane_id = pane_dom_id(tab_id);
    let offset = config.pane_scroll_offset;
    Timeout::new(config.tab_transition_ms, move || {
        showcase.write().modal.finish_tab_transition();
        scroll_to_pane(&pane_id, offset);
    })
    .forget();
}

fn scroll_to_pane(pane_id: &str, offset: f64) {
    let (Some(container), Some(pane)) = (dom::rect(MODAL_CONTENT_ID), dom::rect(pane_id)) else {
        if let Err(e) = dom::scroll_into_view(pane_id) {
            tracing::debug!("{}", e);
        }
        return;
    };
    let top = pane_scroll_top(container.top, pane.top, dom::scroll_top(MODAL_CONTENT_ID), offset);
    dom::smooth_scroll_to(MODAL_CONTENT_ID, top);
}

/// Tabbed section content
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TabPanel { tabs: view.tabs.clone() }
/// }
/// ```
#[component]
pub fn TabPanel(tabs: TabSet) -> Element {
    let showcase = use_showcase();
    let config = use_site_config();

    rsx! {
        div { class: "modal-tabs",
            div { id: TAB_BAR_ID, class: "tab-buttons",
                for (index, tab) in tabs.tabs().iter().enumerate() {
                    {
                        let tab_id = tab.id.clone();
                        let config = config.clone();
                        rsx! {
                            button {
                                key: "{tab.id}",
                                class: tabs.button_class(index),
                                "data-tab": "{tab.id}",
                                onclick: move |_| activate_tab(showcase, &config, &tab_id),
                                "{tab.title}"
                            }
                        }
                    }
                }
            }

            div { class: "tab-content",
                for (index, tab) in tabs.tabs().iter().enumerate() {
                    div {
                        key: "{tab.id}",
                        id: pane_dom_id(&tab.id),
                        class: tabs.pane_class(index),
                        div {
                            class: "section-content",
                            dangerous_inner_html: "{tab.content}",
                        }
                    }
                }
            }
        }
    }
}
