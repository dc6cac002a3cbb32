//! Line segment geometry and segment/ray intersection
//!
//! The intersection is exact Cramer's rule with no epsilon. A determinant
//! that is merely tiny (nearly parallel) can flip between a miss and a very
//! distant hit from frame to frame; that is the expected behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A straight segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

/// Where a ray meets a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Intersection point
    pub point: Vec2,
    /// Distance from the ray origin to `point`
    pub distance: f32,
}

impl Segment {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    /// Intersect with the ray `origin + s * direction`, `s > 0`
    ///
    /// Hits must land strictly inside the segment (endpoints excluded) and
    /// strictly ahead of the origin. Parallel and degenerate cases miss.
    pub fn intersect_ray(&self, origin: Vec2, direction: Vec2) -> Option<RayHit> {
        let (x1, y1) = (self.a.x, self.a.y);
        let (x2, y2) = (self.b.x, self.b.y);
        let (x3, y3) = (origin.x, origin.y);
        let (x4, y4) = (origin.x + direction.x, origin.y + direction.y);

        let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if den == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
        let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

        if t > 0.0 && t < 1.0 && u > 0.0 {
            let point = Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1));
            Some(RayHit {
                point,
                distance: u * direction.length(),
            })
        } else {
            None
        }
    }
}
