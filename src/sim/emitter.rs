//! The viewer: a fan of rays cast from a movable origin
//!
//! Rays store only their direction. The emitter passes its current origin
//! into every cast, so a whole refresh sees one origin and one borrowed wall
//! set; nothing can move underneath a batch.

use glam::Vec2;

use super::boundary::Boundary;
use super::segment::RayHit;
use crate::consts::MIN_RAY_ANGLE_INCREMENT;
use crate::direction_from_degrees;
use crate::error::SimError;

/// One fixed direction of the fan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Unit direction, fixed for the ray's lifetime
    direction: Vec2,
}

impl Ray {
    /// Ray at `degrees` (0° points along +x, angles grow toward +y)
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            direction: direction_from_degrees(degrees),
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Nearest wall hit from `origin`, or `None` if the ray escapes
    ///
    /// Ties keep the first wall in iteration order.
    pub fn cast(&self, origin: Vec2, boundaries: &[Boundary]) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for wall in boundaries {
            if let Some(hit) = wall.segment.intersect_ray(origin, self.direction) {
                match nearest {
                    Some(best) if hit.distance >= best.distance => {}
                    _ => nearest = Some(hit),
                }
            }
        }
        nearest
    }
}

/// A bundle of rays evenly spaced around a full turn
#[derive(Debug, Clone)]
pub struct Emitter {
    pub origin: Vec2,
    rays: Vec<Ray>,
    /// Last refresh result, one slot per ray
    hits: Vec<Option<RayHit>>,
}

impl Emitter {
    /// Emitter at `origin` with one ray every `angle_increment` degrees from 0° up to (not including) 360°
    pub fn new(origin: Vec2, angle_increment: f32) -> Result<Self, SimError> {
        if !(angle_increment >= MIN_RAY_ANGLE_INCREMENT && angle_increment <= 360.0) {
            return Err(SimError::InvalidAngleIncrement(angle_increment));
        }
        let count = (360.0 / angle_increment).ceil() as usize;
        let rays: Vec<Ray> = (0..count)
            .map(|i| Ray::from_degrees(i as f32 * angle_increment))
            .collect();
        Ok(Self {
            origin,
            hits: vec![None; rays.len()],
            rays,
        })
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Hits from the last `refresh`, index-aligned with `rays()`
    #[inline]
    pub fn hits(&self) -> &[Option<RayHit>] {
        &self.hits
    }

    /// Move the emitter (the rays follow automatically)
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Recompute the nearest hit of every ray against `boundaries`
    pub fn refresh(&mut self, boundaries: &[Boundary]) -> Result<(), SimError> {
        if boundaries.is_empty() {
            return Err(SimError::EmptyBoundarySet);
        }
        let origin = self.origin;
        for (ray, slot) in self.rays.iter().zip(self.hits.iter_mut()) {
            *slot = ray.cast(origin, boundaries);
        }
        Ok(())
    }

    /// Number of rays that hit something on the last refresh
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|h| h.is_some()).count()
    }
}
