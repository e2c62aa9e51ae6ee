//! Background Component
//!
//! Full-screen biome gradient with drifting square particles.

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::Biome;

/// Number of particles scattered over the backdrop
pub const PARTICLE_COUNT: usize = 20;

/// One floating square, positioned in viewport percentages
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left: f32,
    pub top: f32,
    /// Animation delay in seconds
    pub delay: f32,
    /// Animation duration in seconds
    pub duration: f32,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

/// Scatter `count` particles with random placement and timing
pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..5.0),
            duration: rng.random_range(3.0..7.0),
        })
        .collect()
}

#[derive(Clone, PartialEq, Props)]
pub struct McBackgroundProps {
    #[props(default)]
    pub biome: Biome,
    #[props(default)]
    pub children: Element,
}

#[component]
pub fn McBackground(props: McBackgroundProps) -> Element {
    // Placement is fixed for the lifetime of the component
    let particles = use_hook(|| scatter_particles(&mut rand::rng(), PARTICLE_COUNT));
    let gradient = props.biome.palette().backdrop_gradient();

    rsx! {
        div { class: "mc-background {props.biome.class()}", style: "background: {gradient};",
            div { class: "mc-background__particles",
                for (index, particle) in particles.iter().enumerate() {
                    div { key: "{index}", class: "mc-particle", style: "{particle.style()}" }
                }
            }
            div { class: "mc-background__content", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn particles_stay_in_viewport() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter_particles(&mut rng, PARTICLE_COUNT);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((3.0..7.0).contains(&p.duration));
        }
    }

    #[test]
    fn particle_style_is_css() {
        let p = Particle { left: 10.0, top: 20.5, delay: 1.0, duration: 4.0 };
        assert_eq!(
            p.style(),
            "left: 10.00%; top: 20.50%; animation-delay: 1.00s; animation-duration: 4.00s;"
        );
    }
}
