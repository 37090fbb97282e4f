//! Engine Badge Component
//!
//! Small icon naming the engine a project was built with.

use dioxus::prelude::*;
use portfolio_core::engine_icon;

/// Inline style showing an engine's icon asset
pub fn badge_style(engine: &str) -> String {
    format!("background-image: url('{}');", engine_icon(engine))
}

/// Engine badge as shown in the project modal header
#[component]
pub fn EngineBadge(
    /// Engine name, e.g. "Godot"
    engine: String,
    /// CSS class (`engine-badge` on cards, `engine-badge-modal` in the modal)
    #[props(default = "engine-badge-modal".to_string())]
    class: String,
) -> Element {
    let style = badge_style(&engine);
    rsx! {
        span {
            class: "{class}",
            "data-engine": "{engine}",
            title: "{engine}",
            style: "{style}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_style_uses_icon() {
        assert_eq!(
            badge_style("Godot"),
            "background-image: url('assets/icons/whitegodot.svg');"
        );
        assert!(badge_style("FriendshipEngine").contains("friendshiplogo.svg"));
    }
}
