//! Decorative background stars
//!
//! Pure decoration: regenerated whenever the canvas changes, never consulted
//! by the visibility core.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, random_span};

/// A single background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStar {
    pub pos: Vec2,
    /// Diameter
    pub size: f32,
    /// Alpha out of 255
    pub alpha: f32,
}

/// Background stars for one canvas size
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<BackgroundStar>,
    /// Canvas width the stars were generated for
    pub canvas_width: f32,
}

impl Starfield {
    pub fn generate<R: Rng>(canvas: &Canvas, count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| BackgroundStar {
                pos: canvas.random_point(rng),
                size: random_span(rng, 1.0, 3.5),
                alpha: random_span(rng, 60.0, 180.0),
            })
            .collect();
        Self {
            stars,
            canvas_width: canvas.width,
        }
    }

    /// True if the field is empty or was built for a different width
    pub fn is_stale(&self, canvas: &Canvas) -> bool {
        self.stars.is_empty() || self.canvas_width != canvas.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_within_canvas() {
        let canvas = Canvas::new(640.0, 480.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(11);
        let field = Starfield::generate(&canvas, 200, &mut rng);
        assert_eq!(field.stars.len(), 200);
        for s in &field.stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < 640.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 480.0);
            assert!(s.size >= 1.0 && s.size < 3.5);
            assert!(s.alpha >= 60.0 && s.alpha < 180.0);
        }
        assert!(!field.is_stale(&canvas));
    }

    #[test]
    fn test_stale_after_width_change() {
        let canvas = Canvas::new(640.0, 480.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(12);
        let field = Starfield::generate(&canvas, 10, &mut rng);
        assert!(field.is_stale(&Canvas::new(1024.0, 480.0).unwrap()));
        assert!(Starfield::default().is_stale(&canvas));
    }
}
