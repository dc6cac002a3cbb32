//! Star Seeker - find the hidden star by shining rays past drifting walls
//!
//! Core modules:
//! - `sim`: Deterministic visibility core (geometry, walls, rays, target, session)
//! - `renderer`: CPU-side vertex builders for whatever draws the frame
//! - `platform`: Caller-side helpers (pointer activation, canvas sizing)
//! - `tuning`: Data-driven difficulty and game constants
//! - `error`: Precondition errors reported to the caller

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Walls are clamped this far inside the canvas edges
    pub const BOUNDARY_MARGIN: f32 = 5.0;
    /// Inset of the four fixed canvas-edge walls
    pub const EDGE_INSET: f32 = 1.0;
    /// Phase advance per wall update
    pub const NOISE_PHASE_STEP: f32 = 0.01;
    /// Upper bound (exclusive) for initial noise phases
    pub const NOISE_PHASE_RANGE: f32 = 1000.0;
    /// Wall drift speed range
    pub const WALL_SPEED_MIN: f32 = 0.5;
    pub const WALL_SPEED_MAX: f32 = 1.5;

    /// Star click radius (hit test)
    pub const STAR_RADIUS: f32 = 25.0;
    /// Star drawn radius (smaller than the click radius)
    pub const STAR_VISUAL_RADIUS: f32 = 15.0;
    /// Star spawns at least this far from the canvas edges
    pub const STAR_SPAWN_INSET: f32 = 100.0;
    /// Star picks a new destination once this close to the current one
    pub const STAR_ARRIVAL_DISTANCE: f32 = 5.0;
    /// Pulse animation step (degrees per visible frame)
    pub const STAR_PULSE_STEP: f32 = 4.0;

    // Tuning limits
    pub const MAX_LEVELS_LIMIT: u32 = 1_000;
    /// Random walls on any single level
    pub const MAX_WALL_COUNT: u32 = 10_000;
    /// Finest ray spacing in degrees (36 000 rays)
    pub const MIN_RAY_ANGLE_INCREMENT: f32 = 0.01;
    pub const MAX_BACKGROUND_STARS: usize = 10_000;
}

/// Unit vector for an angle given in degrees (0° points along +x)
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Linear remap of `value` from [in_min, in_max] to [out_min, out_max], clamped to the output range
#[inline]
pub fn map_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max == in_min {
        return if value < in_min { out_min } else { out_max };
    }
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    out_min + t * (out_max - out_min)
}

/// Returns true if both components are finite
#[inline]
pub fn is_finite_point(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
