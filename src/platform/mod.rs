//! Platform-side helpers
//!
//! Things the window/input layer computes before calling into the core:
//! - Wall activation from the pointer position
//! - Canvas construction from a window size

use glam::Vec2;

use crate::error::SimError;
use crate::map_clamped;
use crate::sim::Canvas;
use crate::tuning::Tuning;

/// How hard walls drift for a pointer at `pointer`, in [0, 1]
///
/// Pointer distance from the canvas center as a fraction of the
/// center-to-corner distance, mapped from the tuning's start/max thresholds
/// to 0..1 and clamped. Near the middle the walls hold still.
pub fn wall_activation(pointer: Vec2, canvas: &Canvas, tuning: &Tuning) -> f32 {
    let fraction = pointer.distance(canvas.center()) / canvas.half_diagonal();
    map_clamped(
        fraction,
        tuning.wall_move_threshold_start,
        tuning.wall_move_threshold_max,
        0.0,
        1.0,
    )
}

/// Canvas for a window of the given pixel size
pub fn canvas_for_window(width: u32, height: u32) -> Result<Canvas, SimError> {
    Canvas::new(width as f32, height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_zero_near_center() {
        let canvas = Canvas::new(800.0, 600.0).unwrap();
        let tuning = Tuning::default();
        assert_eq!(wall_activation(canvas.center(), &canvas, &tuning), 0.0);
        // 0.2 of the half diagonal (500) is 100
        assert_eq!(wall_activation(Vec2::new(490.0, 300.0), &canvas, &tuning), 0.0);
    }

    #[test]
    fn test_activation_ramps_between_thresholds() {
        let canvas = Canvas::new(800.0, 600.0).unwrap();
        let tuning = Tuning::default();
        // 150 from center = 0.3 of the half diagonal, halfway up the ramp
        let a = wall_activation(Vec2::new(550.0, 300.0), &canvas, &tuning);
        assert!((a - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_activation_saturates() {
        let canvas = Canvas::new(800.0, 600.0).unwrap();
        let tuning = Tuning::default();
        assert_eq!(wall_activation(Vec2::ZERO, &canvas, &tuning), 1.0);
        assert_eq!(wall_activation(Vec2::new(800.0, 600.0), &canvas, &tuning), 1.0);
    }

    #[test]
    fn test_canvas_for_window() {
        assert_eq!(canvas_for_window(1280, 720).unwrap().size(), Vec2::new(1280.0, 720.0));
        assert!(canvas_for_window(0, 720).is_err());
    }
}
