//! Canvas bounds and bounded random sampling

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::BOUNDARY_MARGIN;
use crate::error::SimError;

/// Drawable area in canvas units, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    /// Validated canvas; must leave room for the wall clamp margin on both axes
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        let min = 2.0 * BOUNDARY_MARGIN;
        if !(width.is_finite() && height.is_finite()) || width <= min || height <= min {
            return Err(SimError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Distance from the center to a corner
    #[inline]
    pub fn half_diagonal(&self) -> f32 {
        self.center().length()
    }

    /// Clamp a point to `[margin, dimension - margin]` on each axis
    #[inline]
    pub fn clamp_inset(&self, p: Vec2, margin: f32) -> Vec2 {
        let lo = Vec2::splat(margin);
        let hi = (self.size() - lo).max(lo);
        p.clamp(lo, hi)
    }

    /// Uniform point anywhere on the canvas
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        self.random_point_inset(rng, 0.0)
    }

    /// Uniform point at least `inset` from every edge
    pub fn random_point_inset<R: Rng>(&self, rng: &mut R, inset: f32) -> Vec2 {
        Vec2::new(
            random_span(rng, inset, self.width - inset),
            random_span(rng, inset, self.height - inset),
        )
    }
}

/// Uniform sample in `[lo, hi)`; collapses to the midpoint when the span is empty
pub fn random_span<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}
