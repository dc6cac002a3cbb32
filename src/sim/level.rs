//! Per-level difficulty
//!
//! Linear in the level index: more walls, a faster star, and a smaller
//! reveal distance (floored) each level.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_WALL_COUNT;
use crate::error::SimError;
use crate::tuning::Tuning;

/// Fixed canvas-edge walls added on top of the random ones
pub const EDGE_WALL_COUNT: usize = 4;

/// Difficulty knobs for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelParams {
    /// 1-based level index
    pub level: u32,
    /// Random walls (edge walls not included)
    pub wall_count: u32,
    /// Star lerp fraction per frame
    pub star_speed: f32,
    /// Star shows when the emitter is strictly closer than this
    pub reveal_distance: f32,
}

impl LevelParams {
    /// Parameters for `level` (1-based); errors outside `1..=max_levels`
    ///
    /// Also errors when the tuning yields a wall count past `MAX_WALL_COUNT`
    /// or a star speed outside (0, 1] for this level.
    pub fn for_level(level: u32, tuning: &Tuning) -> Result<Self, SimError> {
        if level == 0 || level > tuning.max_levels {
            return Err(SimError::LevelOutOfRange {
                level,
                max: tuning.max_levels,
            });
        }
        let steps = level - 1;
        let wall_count = steps
            .checked_mul(tuning.wall_increment_per_level)
            .and_then(|extra| tuning.base_wall_count.checked_add(extra))
            .filter(|count| *count <= MAX_WALL_COUNT)
            .ok_or_else(|| {
                SimError::InvalidTuning(format!(
                    "wall count on level {level} exceeds {MAX_WALL_COUNT}"
                ))
            })?;

        let star_speed = tuning.base_star_speed + steps as f32 * tuning.star_speed_increment;
        // Lerp fraction: above 1 overshoots and diverges
        if !(star_speed > 0.0 && star_speed <= 1.0) {
            return Err(SimError::InvalidTuning(format!(
                "star speed on level {level} is {star_speed}, must be in (0, 1]"
            )));
        }

        let reveal_distance = (tuning.base_reveal_distance
            - steps as f32 * tuning.reveal_decrement)
            .max(tuning.reveal_floor);
        if !(reveal_distance.is_finite() && reveal_distance > 0.0) {
            return Err(SimError::InvalidTuning(format!(
                "reveal distance on level {level} is {reveal_distance}"
            )));
        }

        Ok(Self {
            level,
            wall_count,
            star_speed,
            reveal_distance,
        })
    }

    /// Random walls plus the four edge walls
    pub fn total_boundaries(&self) -> usize {
        self.wall_count as usize + EDGE_WALL_COUNT
    }
}
