use dioxus::prelude::*;
use portfolio_core::{particles::scatter, Particle, ParticleKind};

/// Decorative particle layer, scattered once per mount
#[component]
pub fn ParticleField(kind: ParticleKind) -> Element {
    let particles: Vec<Particle> = use_hook(move || scatter(kind, &mut rand::thread_rng()));

    rsx! {
        div { class: "particles", "aria-hidden": "true",
            for (i, particle) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: kind.class(),
                    style: particle.style(kind),
                }
            }
        }
    }
}
