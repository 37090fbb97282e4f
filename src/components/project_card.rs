//! Project Card Component
//!
//! Grid card on the landing page. Clicking "View Details" opens the project
//! modal for the card's `project_id`.

use dioxus::prelude::*;
use portfolio_core::ProjectCard;
use portfolio_ui::EngineBadge;

use crate::components::FadeIn;
use crate::context::{open_project, use_repository, use_showcase};

#[component]
pub fn ProjectCardView(
    /// Manifest key; a card without one logs an error instead of opening
    project_id: Option<String>,
    title: String,
    image: String,
    engine: String,
    summary: String,
) -> Element {
    let showcase = use_showcase();
    let repository = use_repository();

    let card = ProjectCard {
        project_id: project_id.clone(),
        title: title.clone(),
        banner_src: image.clone(),
        engine: engine.clone(),
    };
    let reveal_id = format!("card-{}", project_id.as_deref().unwrap_or("untitled"));

    rsx! {
        FadeIn { id: reveal_id,
            div {
                class: "project-card",
                "data-project-id": project_id.clone().unwrap_or_default(),

                img { class: "project-image", src: "{image}", alt: "{title}" }

                div { class: "project-info",
                    div { class: "project-title-row",
                        h3 { "{title}" }
                        EngineBadge { engine: engine.clone(), class: "engine-badge".to_string() }
                    }
                    p { class: "project-summary", "{summary}" }
                    a {
                        class: "project-link",
                        href: "#",
                        onclick: move |e| {
                            e.prevent_default();
                            spawn(open_project(showcase, repository, card.clone()));
                        },
                        "View Details"
                    }
                }
            }
        }
    }
}
