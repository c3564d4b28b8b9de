//! Ambient particle field behind the page content.

use rand::Rng;
use std::ops::Range;

/// Viewport area (px²) covered by one particle.
pub const AREA_PER_PARTICLE: f64 = 20_000.0;
/// Duration of one drift cycle at speed 1.0.
pub const BASE_CYCLE_SECONDS: f64 = 8.0;

const SIZE_RANGE: Range<f64> = 1.0..3.0;
const SPEED_RANGE: Range<f64> = 0.5..1.5;
const OPACITY_RANGE: Range<f64> = 0.1..0.6;
const DELAY_RANGE: Range<f64> = 0.0..5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
    pub delay: f64,
}

impl Particle {
    pub fn animation_duration(&self) -> f64 {
        BASE_CYCLE_SECONDS / self.speed
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px; opacity: {:.3}; animation-delay: {:.3}s; animation-duration: {:.3}s;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            self.delay,
            self.animation_duration()
        )
    }
}

pub fn particle_count(width: f64, height: f64) -> usize {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return 0;
    }

    (width * height / AREA_PER_PARTICLE).floor() as usize
}

/// Builds a fresh field for a `width` x `height` viewport. Nothing is kept
/// from any previous field.
pub fn generate<R: Rng>(width: f64, height: f64, rng: &mut R) -> Vec<Particle> {
    (0..particle_count(width, height))
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            size: rng.gen_range(SIZE_RANGE),
            speed: rng.gen_range(SPEED_RANGE),
            opacity: rng.gen_range(OPACITY_RANGE),
            delay: rng.gen_range(DELAY_RANGE),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn count_follows_viewport_area() {
        assert_eq!(particle_count(2000.0, 1000.0), 100);
        assert_eq!(particle_count(1280.0, 720.0), 46);
        assert_eq!(particle_count(100.0, 199.0), 0);
    }

    #[test]
    fn degenerate_viewport_yields_no_particles() {
        let mut rng = StdRng::seed_from_u64(7);

        assert!(generate(0.0, 900.0, &mut rng).is_empty());
        assert!(generate(1200.0, -1.0, &mut rng).is_empty());
        assert!(generate(f64::NAN, 900.0, &mut rng).is_empty());
    }

    #[test]
    fn drawn_values_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = generate(1920.0, 1080.0, &mut rng);

        assert_eq!(field.len(), 103);
        for (index, particle) in field.iter().enumerate() {
            assert_eq!(particle.id, index);
            assert!((0.0..1920.0).contains(&particle.x));
            assert!((0.0..1080.0).contains(&particle.y));
            assert!(SIZE_RANGE.contains(&particle.size));
            assert!(SPEED_RANGE.contains(&particle.speed));
            assert!(OPACITY_RANGE.contains(&particle.opacity));
            assert!(DELAY_RANGE.contains(&particle.delay));
        }
    }

    #[test]
    fn regeneration_keeps_count_but_not_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = generate(2000.0, 1000.0, &mut rng);
        let second = generate(2000.0, 1000.0, &mut rng);

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn faster_particles_cycle_sooner() {
        let particle = Particle {
            id: 0,
            x: 0.0,
            y: 0.0,
            size: 2.0,
            speed: 0.5,
            opacity: 0.3,
            delay: 1.0,
        };
        let faster = Particle {
            speed: 1.25,
            ..particle.clone()
        };

        assert_eq!(particle.animation_duration(), 16.0);
        assert_eq!(faster.animation_duration(), 6.4);
        assert!(particle.style().contains("animation-duration: 16.000s;"));
    }
}
