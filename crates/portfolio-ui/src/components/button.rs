//! Button Components
//!
//! Icon-only controls used by the overlays:
//! - Close: the × in the corner of the modal and lightbox
//! - Arrow: previous/next navigation in the lightbox

use dioxus::prelude::*;

/// Direction of a carousel arrow
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Prev,
    Next,
}

impl ArrowDirection {
    /// Returns the CSS class for this direction
    pub fn class(&self) -> &'static str {
        match self {
            ArrowDirection::Prev => "lightbox-nav lightbox-prev",
            ArrowDirection::Next => "lightbox-nav lightbox-next",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowDirection::Prev => "\u{2039}",
            ArrowDirection::Next => "\u{203A}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArrowDirection::Prev => "Previous image",
            ArrowDirection::Next => "Next image",
        }
    }
}

/// Icon button for compact actions (close, navigate)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| {
                // Keep the click from reaching the overlay's backdrop handler
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with × icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CloseButton { class: "close-modal", onclick: move |_| close() }
/// }
/// ```
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    let class = class.unwrap_or_else(|| "close-btn".to_string());
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: class,
            "\u{00D7}"
        }
    }
}

/// Carousel arrow; hidden (not removed) when `visible` is false
#[component]
pub fn ArrowButton(direction: ArrowDirection, visible: bool, onclick: EventHandler<()>) -> Element {
    let display = if visible { "flex" } else { "none" };
    rsx! {
        span { style: "display: {display};",
            IconButton {
                onclick: onclick,
                aria_label: direction.label().to_string(),
                class: direction.class().to_string(),
                "{direction.glyph()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_direction_classes() {
        assert_eq!(ArrowDirection::Prev.class(), "lightbox-nav lightbox-prev");
        assert_eq!(ArrowDirection::Next.class(), "lightbox-nav lightbox-next");
    }

    #[test]
    fn arrow_direction_labels() {
        assert_eq!(ArrowDirection::Prev.label(), "Previous image");
        assert_ne!(ArrowDirection::Prev.glyph(), ArrowDirection::Next.glyph());
    }
}
