//! Project Modal Component
//!
//! Detail overlay for one project: banner header, tabbed sections and the
//! screenshot grid. Content is resolved before the modal shows, so it never
//! renders a loading state.

use dioxus::prelude::*;
use gloo::timers::callback::Timeout;
use portfolio_ui::{CloseButton, EngineBadge};

use crate::components::{tab_sidebar::setup_tab_sidebar, ScreenshotGrid, TabPanel};
use crate::context::{
    close_project, record_modal_scroll, use_showcase, use_site_config, MODAL_BODY_ID,
    MODAL_CONTENT_ID,
};

#[component]
pub fn ProjectModal() -> Element {
    let showcase = use_showcase();
    let config = use_site_config();

    // Changes once per opening, even when the same project is reopened
    let session = use_memo(move || {
        let state = showcase.read();
        state.modal.is_open().then(|| state.modal.session())
    });

    let setup_config = config.clone();
    use_effect(move || {
        let Some(session) = session() else {
            return;
        };
        let config = setup_config.clone();
        Timeout::new(config.sidebar_setup_delay_ms, move || {
            setup_tab_sidebar(showcase, &config, session);
        })
        .forget();
    });

    let (is_open, view) = {
        let state = showcase.read();
        (state.modal.is_open(), state.modal.view().cloned())
    };
    let Some(view) = view else {
        return rsx! {
            div { id: "projectModal", class: "modal" }
        };
    };
    let header = view.header;
    let tabs = view.tabs;
    let grid = view.gallery.grid().to_vec();

    rsx! {
        div {
            id: "projectModal",
            class: if is_open { "modal show" } else { "modal" },
            onclick: move |_| close_project(showcase),

            div {
                id: MODAL_CONTENT_ID,
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),
                onscroll: move |_| record_modal_scroll(showcase),

                CloseButton {
                    class: "close-modal".to_string(),
                    onclick: move |_| close_project(showcase),
                }

                div { class: "modal-header",
                    img {
                        id: "modalBanner",
                        class: "modal-banner",
                        src: "{header.banner_src}",
                        alt: "{header.title}",
                    }
                    div { class: "modal-title-row",
                        h2 { id: "modalTitle", "{header.title}" }
                        EngineBadge { engine: header.engine.clone() }
                    }
                }

                div {
                    id: MODAL_BODY_ID,
                    class: "modal-body",
                    onscroll: move |_| record_modal_scroll(showcase),

                    TabPanel { tabs }

                    section { class: "modal-screenshots",
                        h3 { "Screenshots & Features" }
                        ScreenshotGrid { items: grid }
                    }
                }
            }
        }
    }
}
