//! The hidden star: wanders the canvas and shows itself only up close

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, random_span};
use crate::consts::*;

/// The star the player has to click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Current destination
    pub target_pos: Vec2,
    /// Lerp fraction toward `target_pos` per step
    pub speed: f32,
    /// Click hit-test radius
    pub radius: f32,
    /// Drawn radius
    pub visual_radius: f32,
    /// Pulse animation phase in degrees [0, 360)
    pub pulse_angle: f32,
    /// Result of the last visibility update
    #[serde(skip)]
    pub visible: bool,
}

impl Target {
    /// Star at `pos` with no destination yet (the first step picks one)
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            target_pos: pos,
            speed,
            radius: STAR_RADIUS,
            visual_radius: STAR_VISUAL_RADIUS,
            pulse_angle: 0.0,
            visible: false,
        }
    }

    /// Star at a random spot away from the edges, with a random pulse phase
    pub fn spawn<R: Rng>(canvas: &Canvas, speed: f32, rng: &mut R) -> Self {
        let pos = canvas.random_point_inset(rng, STAR_SPAWN_INSET);
        let mut target = Self::new(pos, speed);
        target.pulse_angle = random_span(rng, 0.0, 360.0);
        target
    }

    /// One motion step
    ///
    /// Within the arrival distance a new destination is picked and the star
    /// does not move this step; otherwise it lerps toward the destination, so
    /// it slows down on approach.
    pub fn advance<R: Rng>(&mut self, canvas: &Canvas, rng: &mut R) {
        if self.pos.distance(self.target_pos) < STAR_ARRIVAL_DISTANCE {
            self.target_pos = canvas.random_point_inset(rng, self.radius);
        } else {
            self.pos = self.pos.lerp(self.target_pos, self.speed);
        }
    }

    /// True iff the star is strictly closer than `reveal_distance` to `viewer`
    ///
    /// No hysteresis: a viewer parked exactly on the threshold can flicker.
    #[inline]
    pub fn is_visible_from(&self, viewer: Vec2, reveal_distance: f32) -> bool {
        self.pos.distance(viewer) < reveal_distance
    }

    /// Recompute `visible` for this frame and advance the pulse while shown
    pub fn update_visibility(&mut self, viewer: Vec2, reveal_distance: f32) -> bool {
        self.visible = self.is_visible_from(viewer, reveal_distance);
        if self.visible {
            self.pulse_angle = (self.pulse_angle + STAR_PULSE_STEP) % 360.0;
        }
        self.visible
    }

    /// Click test against the (larger) hit radius
    #[inline]
    pub fn hit_test(&self, pointer: Vec2) -> bool {
        self.pos.distance(pointer) < self.radius
    }

    /// Extra ring diameter from the pulse, 0..12
    pub fn pulse_size(&self) -> f32 {
        let s = self.pulse_angle.to_radians().sin();
        crate::map_clamped(s, -1.0, 1.0, 0.0, 12.0)
    }

    /// Ring alpha from the pulse, 60..180 (out of 255)
    pub fn pulse_alpha(&self) -> f32 {
        let s = self.pulse_angle.to_radians().sin();
        crate::map_clamped(s, -1.0, 1.0, 60.0, 180.0)
    }
}
