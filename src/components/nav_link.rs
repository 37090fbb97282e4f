use dioxus::prelude::*;

use crate::dom;

/// In-page anchor that smooth-scrolls to the section with id `target`
#[component]
pub fn NavLink(target: String, children: Element) -> Element {
    let href = format!("#{}", target);
    rsx! {
        a {
            class: "nav-link",
            href: "{href}",
            onclick: move |e| {
                e.prevent_default();
                if let Err(err) = dom::scroll_into_view(&target) {
                    tracing::warn!("{}", err);
                }
            },
            {children}
        }
    }
}
