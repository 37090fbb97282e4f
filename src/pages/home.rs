//! Home page - the single-page portfolio.
//!
//! Hero banner, project grid and contact section, with the project modal,
//! floating tab sidebar and lightbox layered on top.

use dioxus::prelude::*;
use portfolio_core::ParticleKind;

use crate::components::{
    LightboxOverlay, NavLink, ParticleField, ProjectCardView, ProjectModal, TabSidebarNav,
};

/// Card copy for the project grid. Section content comes from the manifest.
struct Showcased {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    engine: &'static str,
    summary: &'static str,
}

const SHOWCASED: &[Showcased] = &[
    Showcased {
        id: "emberfall",
        title: "Emberfall",
        image: "assets/images/emberfall/banner.png",
        engine: "Godot",
        summary: "A pixel-art roguelite about keeping the last hearth alight.",
    },
    Showcased {
        id: "pixel-courier",
        title: "Pixel Courier",
        image: "assets/images/pixel-courier/banner.png",
        engine: "Unity",
        summary: "Deliver parcels across a procedurally stitched city before the lights go out.",
    },
    Showcased {
        id: "friend-quest",
        title: "Friend Quest",
        image: "assets/images/friend-quest/banner.png",
        engine: "FriendshipEngine",
        summary: "A cooperative puzzle adventure built on a home-grown engine.",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        nav { class: "site-nav",
            NavLink { target: "hero", "Home" }
            NavLink { target: "projects", "Projects" }
            NavLink { target: "contact", "Contact" }
        }

        header { id: "hero", class: "hero",
            ParticleField { kind: ParticleKind::Hero }
            div { class: "hero-content",
                h1 { class: "hero-title", "Game Developer Portfolio" }
                p { class: "hero-subtitle", "Small worlds, carefully made." }
                NavLink { target: "projects", "See my work" }
            }
        }

        section { id: "projects", class: "projects",
            ParticleField { kind: ParticleKind::Projects }
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid",
                for project in SHOWCASED {
                    ProjectCardView {
                        key: "{project.id}",
                        project_id: project.id.to_string(),
                        title: project.title.to_string(),
                        image: project.image.to_string(),
                        engine: project.engine.to_string(),
                        summary: project.summary.to_string(),
                    }
                }
            }
        }

        section { id: "contact", class: "contact",
            ParticleField { kind: ParticleKind::Contact }
            h2 { class: "section-title", "Contact" }
            p { "Want to talk games? Drop me a line." }
            a { class: "contact-link", href: "mailto:hello@example.com", "hello@example.com" }
        }

        ProjectModal {}
        TabSidebarNav {}
        LightboxOverlay {}
    }
}
