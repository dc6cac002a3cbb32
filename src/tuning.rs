//! Data-driven game balance
//!
//! Every difficulty knob lives here so a JSON file can override it without a
//! rebuild. Missing fields fall back to the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BACKGROUND_STARS, MAX_LEVELS_LIMIT, MIN_RAY_ANGLE_INCREMENT};
use crate::error::SimError;
use crate::sim::LevelParams;

/// Difficulty and layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Number of levels before the game is finished
    pub max_levels: u32,

    // === Walls ===
    /// Random walls on level 1 (the four edge walls come on top)
    pub base_wall_count: u32,
    /// Extra random walls per level
    pub wall_increment_per_level: u32,
    /// Pointer distance fraction where walls start drifting
    pub wall_move_threshold_start: f32,
    /// Pointer distance fraction where drift reaches full strength
    pub wall_move_threshold_max: f32,

    // === Star ===
    /// Lerp fraction per frame on level 1
    pub base_star_speed: f32,
    /// Lerp fraction added per level
    pub star_speed_increment: f32,
    /// Reveal distance on level 1
    pub base_reveal_distance: f32,
    /// Reveal distance removed per level
    pub reveal_decrement: f32,
    /// Reveal distance never drops below this
    pub reveal_floor: f32,

    // === Rays ===
    /// Degrees between neighbouring rays
    pub ray_angle_increment: f32,

    // === Decoration ===
    /// Background star count
    pub background_star_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_levels: 3,

            base_wall_count: 5,
            wall_increment_per_level: 2,
            wall_move_threshold_start: 0.2,
            wall_move_threshold_max: 0.4,

            base_star_speed: 0.03,
            star_speed_increment: 0.008,
            base_reveal_distance: 160.0,
            reveal_decrement: 15.0,
            reveal_floor: 50.0,

            ray_angle_increment: 1.0,

            background_star_count: 200,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning ({} levels)", tuning.max_levels);
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the core cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_levels == 0 || self.max_levels > MAX_LEVELS_LIMIT {
            return Err(SimError::InvalidTuning(format!(
                "max_levels must be in 1..={MAX_LEVELS_LIMIT}"
            )));
        }
        if !(self.ray_angle_increment >= MIN_RAY_ANGLE_INCREMENT
            && self.ray_angle_increment <= 360.0)
        {
            return Err(SimError::InvalidAngleIncrement(self.ray_angle_increment));
        }
        if self.background_star_count > MAX_BACKGROUND_STARS {
            return Err(SimError::InvalidTuning(format!(
                "background_star_count must be at most {MAX_BACKGROUND_STARS}"
            )));
        }
        let scalars = [
            ("wall_move_threshold_start", self.wall_move_threshold_start),
            ("wall_move_threshold_max", self.wall_move_threshold_max),
            ("base_star_speed", self.base_star_speed),
            ("star_speed_increment", self.star_speed_increment),
            ("base_reveal_distance", self.base_reveal_distance),
            ("reveal_decrement", self.reveal_decrement),
            ("reveal_floor", self.reveal_floor),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::InvalidTuning(format!("{name} is not finite")));
        }
        if self.wall_move_threshold_max < self.wall_move_threshold_start {
            return Err(SimError::InvalidTuning(
                "wall_move_threshold_max is below wall_move_threshold_start".into(),
            ));
        }
        if self.reveal_floor <= 0.0 {
            return Err(SimError::InvalidTuning("reveal_floor must be positive".into()));
        }
        // Wall count and star speed are linear in the level, so the first and
        // last level bound every level in between
        LevelParams::for_level(1, self)?;
        LevelParams::for_level(self.max_levels, self)?;
        Ok(())
    }
}
