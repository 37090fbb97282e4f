//! Decorative particle fields.
//!
//! Each decorated section gets a fixed number of absolutely positioned dots
//! with a randomized float animation.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Pixel dots drifting over the hero banner
    Hero,
    /// Dense field behind the project cards
    Projects,
    /// Sparse field in the contact section
    Contact,
}

impl ParticleKind {
    pub fn count(&self) -> usize {
        match self {
            ParticleKind::Hero => 60,
            ParticleKind::Projects => 130,
            ParticleKind::Contact => 22,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ParticleKind::Hero => "pixel-particle",
            ParticleKind::Projects => "project-particle",
            ParticleKind::Contact => "contact-particle",
        }
    }

    /// CSS keyframes name
    pub fn animation(&self) -> &'static str {
        match self {
            ParticleKind::Hero => "floatPixel",
            ParticleKind::Projects | ParticleKind::Contact => "floatProjectParticle",
        }
    }

    /// `(minimum, spread)` of the animation duration in seconds
    fn duration_range(&self) -> (f64, f64) {
        match self {
            ParticleKind::Hero => (6.0, 4.0),
            ParticleKind::Projects | ParticleKind::Contact => (3.0, 3.0),
        }
    }
}

const MAX_DELAY_SECS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    /// Inline style for one particle element
    pub fn style(&self, kind: ParticleKind) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation: {} {:.3}s ease-in-out infinite; animation-delay: {:.3}s;",
            self.left_pct,
            self.top_pct,
            kind.animation(),
            self.duration_secs,
            self.delay_secs
        )
    }
}

/// Lay out a full field for `kind`
pub fn scatter<R: Rng + ?Sized>(kind: ParticleKind, rng: &mut R) -> Vec<Particle> {
    let (min_duration, spread) = kind.duration_range();
    (0..kind.count())
        .map(|_| Particle {
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            duration_secs: min_duration + rng.gen::<f64>() * spread,
            delay_secs: rng.gen::<f64>() * MAX_DELAY_SECS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn field_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scatter(ParticleKind::Hero, &mut rng).len(), 60);
        assert_eq!(scatter(ParticleKind::Projects, &mut rng).len(), 130);
        assert_eq!(scatter(ParticleKind::Contact, &mut rng).len(), 22);
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for p in scatter(ParticleKind::Hero, &mut rng) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((6.0..10.0).contains(&p.duration_secs));
            assert!((0.0..3.0).contains(&p.delay_secs));
        }
        for p in scatter(ParticleKind::Contact, &mut rng) {
            assert!((3.0..6.0).contains(&p.duration_secs));
        }
    }

    #[test]
    fn style_names_the_animation() {
        let p = Particle {
            left_pct: 10.0,
            top_pct: 20.0,
            duration_secs: 4.5,
            delay_secs: 1.0,
        };
        let style = p.style(ParticleKind::Projects);
        assert!(style.contains("floatProjectParticle 4.500s"));
        assert!(style.starts_with("left: 10.000%; top: 20.000%;"));
    }
}
