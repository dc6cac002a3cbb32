//! Precondition errors reported by the core
//!
//! Geometry misses are not errors; these are only raised for input the
//! caller should never hand in (NaN positions, empty wall sets, bad tuning).

use thiserror::Error;

/// Errors returned by session and scene operations
#[derive(Debug, Error)]
pub enum SimError {
    #[error("non-finite value for {what}")]
    NonFinite { what: &'static str },

    #[error("boundary set is empty")]
    EmptyBoundarySet,

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("ray angle increment must be in [0.01, 360], got {0}")]
    InvalidAngleIncrement(f32),

    #[error("level {level} out of range 1..={max}")]
    LevelOutOfRange { level: u32, max: u32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("failed to parse tuning: {0}")]
    TuningParse(#[from] serde_json::Error),
}

/// Check a scalar input, naming it in the error
pub(crate) fn ensure_finite(value: f32, what: &'static str) -> Result<f32, SimError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NonFinite { what })
    }
}

/// Check a point input, naming it in the error
pub(crate) fn ensure_finite_point(p: glam::Vec2, what: &'static str) -> Result<glam::Vec2, SimError> {
    if crate::is_finite_point(p) {
        Ok(p)
    } else {
        Err(SimError::NonFinite { what })
    }
}
