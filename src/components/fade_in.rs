//! Fade-In Wrapper
//!
//! Reveals its children the first time they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::use_site_config;
use crate::dom::IntersectionSubscription;

const HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;";
const SHOWN_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FadeIn { id: "card-emberfall", ProjectCardView { .. } }
/// }
/// ```
#[component]
pub fn FadeIn(id: String, children: Element) -> Element {
    let config = use_site_config();
    let mut revealed = use_signal(|| false);
    let observer: Rc<RefCell<Option<IntersectionSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    let target = id.clone();
    use_effect(move || {
        if revealed() {
            // Once shown, stays shown
            observer.borrow_mut().take();
            return;
        }
        if observer.borrow().is_some() {
            return;
        }
        match IntersectionSubscription::observe(
            &target,
            &config.reveal_root_margin,
            config.reveal_threshold,
            move |intersecting| {
                if intersecting {
                    revealed.set(true);
                }
            },
        ) {
            Ok(subscription) => *observer.borrow_mut() = Some(subscription),
            Err(e) => {
                tracing::debug!("Reveal observer unavailable, showing #{}: {}", target, e);
                revealed.set(true);
            }
        }
    });

    rsx! {
        div {
            id: "{id}",
            class: "fade-in",
            style: if revealed() { SHOWN_STYLE } else { HIDDEN_STYLE },
            {children}
        }
    }
}
