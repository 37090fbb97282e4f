use dioxus::prelude::*;
use portfolio_core::GridItem;

use crate::context::{sync_scroll_lock, use_showcase};

/// Clickable screenshot tiles; each opens the lightbox at its own image
#[component]
pub fn ScreenshotGrid(items: Vec<GridItem>) -> Element {
    let mut showcase = use_showcase();

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { id: "screenshotGrid", class: "screenshot-grid",
            for item in items {
                {
                    let index = item.lightbox_index;
                    rsx! {
                        div { key: "{index}", class: "screenshot-item",
                            img {
                                src: "{item.src}",
                                alt: "{item.caption}",
                                loading: "lazy",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    let result = showcase.write().open_lightbox_at(index);
                                    match result {
                                        Ok(()) => sync_scroll_lock(showcase),
                                        Err(err) => tracing::warn!("{}", err),
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
