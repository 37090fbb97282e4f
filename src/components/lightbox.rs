//! Lightbox Overlay Component
//!
//! Full-size image viewer layered above the project modal. Keyboard
//! navigation is routed from the window listener in `App`.

use dioxus::prelude::*;
use portfolio_core::ShowcaseState;
use portfolio_ui::{ArrowButton, ArrowDirection, CloseButton};

use crate::context::{sync_scroll_lock, use_showcase};

fn close_lightbox(mut showcase: Signal<ShowcaseState>) {
    showcase.write().close_lightbox();
    sync_scroll_lock(showcase);
}

#[component]
pub fn LightboxOverlay() -> Element {
    let mut showcase = use_showcase();

    let (image, navigation) = {
        let state = showcase.read();
        let lightbox = &state.lightbox;
        match lightbox.current() {
            Some(image) if lightbox.is_open() => (image.clone(), lightbox.shows_navigation()),
            _ => {
                return rsx! {
                    div { id: "lightboxModal", class: "lightbox-modal" }
                };
            }
        }
    };

    rsx! {
        div {
            id: "lightboxModal",
            class: "lightbox-modal show",
            onclick: move |_| close_lightbox(showcase),

            CloseButton {
                class: "close-lightbox".to_string(),
                onclick: move |_| close_lightbox(showcase),
            }

            ArrowButton {
                direction: ArrowDirection::Prev,
                visible: navigation,
                onclick: move |_| showcase.write().lightbox.prev(),
            }

            div { class: "lightbox-content", onclick: move |e| e.stop_propagation(),
                img { id: "lightboxImage", src: "{image.src}", alt: "{image.caption}" }
                div { id: "lightboxCaption", class: "lightbox-caption", "{image.caption}" }
            }

            ArrowButton {
                direction: ArrowDirection::Next,
                visible: navigation,
                onclick: move |_| showcase.write().lightbox.next(),
            }
        }
    }
}
