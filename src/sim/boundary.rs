//! Drifting wall segments that block line of sight

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::canvas::{Canvas, random_span};
use super::drift::DriftNoise;
use super::segment::Segment;
use crate::consts::*;

/// Noise phase per endpoint axis: a.x, a.y, b.x, b.y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftPhases(pub [f32; 4]);

/// A wall that drifts under coherent noise while the pointer is far from center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub segment: Segment,
    pub phases: DriftPhases,
    /// Drift amplitude at full activation (units per frame)
    pub speed: f32,
}

impl Boundary {
    pub fn new(a: Vec2, b: Vec2, phases: DriftPhases, speed: f32) -> Self {
        Self {
            segment: Segment::new(a, b),
            phases,
            speed,
        }
    }

    /// Wall with random phases and speed
    pub fn with_random_drift<R: Rng>(a: Vec2, b: Vec2, rng: &mut R) -> Self {
        let phases = DriftPhases([
            random_span(rng, 0.0, NOISE_PHASE_RANGE),
            random_span(rng, 0.0, NOISE_PHASE_RANGE),
            random_span(rng, 0.0, NOISE_PHASE_RANGE),
            random_span(rng, 0.0, NOISE_PHASE_RANGE),
        ]);
        let speed = random_span(rng, WALL_SPEED_MIN, WALL_SPEED_MAX);
        Self::new(a, b, phases, speed)
    }

    /// Wall with both endpoints anywhere on the canvas
    pub fn random<R: Rng>(canvas: &Canvas, rng: &mut R) -> Self {
        let a = canvas.random_point(rng);
        let b = canvas.random_point(rng);
        Self::with_random_drift(a, b, rng)
    }

    #[inline]
    pub fn a(&self) -> Vec2 {
        self.segment.a
    }

    #[inline]
    pub fn b(&self) -> Vec2 {
        self.segment.b
    }

    /// Drift both endpoints; no-op unless `activation > 0`
    ///
    /// Each axis of each endpoint moves by `(noise(phase) - 0.5) * 2 * speed * activation`,
    /// then the endpoints are clamped back inside the canvas margin.
    pub fn update(&mut self, activation: f32, canvas: &Canvas, noise: &DriftNoise) {
        if !(activation > 0.0) {
            return;
        }

        let amount = self.speed * activation;
        let offset = |phase: f32| (noise.sample(phase) - 0.5) * 2.0 * amount;
        let [ax, ay, bx, by] = self.phases.0;

        let a = self.segment.a + Vec2::new(offset(ax), offset(ay));
        let b = self.segment.b + Vec2::new(offset(bx), offset(by));

        for phase in self.phases.0.iter_mut() {
            *phase += NOISE_PHASE_STEP;
        }

        self.segment.a = canvas.clamp_inset(a, BOUNDARY_MARGIN);
        self.segment.b = canvas.clamp_inset(b, BOUNDARY_MARGIN);
    }
}

/// The four fixed walls that frame the canvas, inset by one unit
pub fn edge_boundaries<R: Rng>(canvas: &Canvas, rng: &mut R) -> [Boundary; 4] {
    let lo = EDGE_INSET;
    let w = canvas.width - EDGE_INSET;
    let h = canvas.height - EDGE_INSET;
    [
        Boundary::with_random_drift(Vec2::new(lo, lo), Vec2::new(w, lo), rng),
        Boundary::with_random_drift(Vec2::new(w, lo), Vec2::new(w, h), rng),
        Boundary::with_random_drift(Vec2::new(w, h), Vec2::new(lo, h), rng),
        Boundary::with_random_drift(Vec2::new(lo, h), Vec2::new(lo, lo), rng),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 600.0).unwrap()
    }

    fn in_bounds(p: Vec2, canvas: &Canvas) -> bool {
        p.x >= BOUNDARY_MARGIN
            && p.x <= canvas.width - BOUNDARY_MARGIN
            && p.y >= BOUNDARY_MARGIN
            && p.y <= canvas.height - BOUNDARY_MARGIN
    }

    #[test]
    fn test_update_noop_without_activation() {
        let mut rng = Pcg32::seed_from_u64(1);
        let canvas = canvas();
        let noise = DriftNoise::new(1);
        let mut wall = Boundary::random(&canvas, &mut rng);
        let before = wall.clone();

        wall.update(0.0, &canvas, &noise);
        wall.update(-0.5, &canvas, &noise);
        wall.update(f32::NAN, &canvas, &noise);
        assert_eq!(wall, before);
    }

    #[test]
    fn test_update_advances_phases() {
        let mut rng = Pcg32::seed_from_u64(2);
        let canvas = canvas();
        let noise = DriftNoise::new(2);
        let mut wall = Boundary::random(&canvas, &mut rng);
        let before = wall.phases.0;

        wall.update(1.0, &canvas, &noise);
        for (after, before) in wall.phases.0.iter().zip(before) {
            assert!((after - before - NOISE_PHASE_STEP).abs() < 1e-3);
        }
    }

    #[test]
    fn test_update_step_is_bounded_by_speed() {
        let mut rng = Pcg32::seed_from_u64(3);
        let canvas = canvas();
        let noise = DriftNoise::new(3);
        let mut wall = Boundary::new(
            Vec2::new(300.0, 300.0),
            Vec2::new(500.0, 300.0),
            DriftPhases([1.3, 20.7, 300.1, 999.9]),
            1.5,
        );
        for _ in 0..200 {
            let (a, b) = (wall.a(), wall.b());
            wall.update(rng.random_range(0.0..=1.0), &canvas, &noise);
            // Per-axis offset never exceeds speed * activation
            assert!((wall.a() - a).abs().max_element() <= 1.5 + 1e-4);
            assert!((wall.b() - b).abs().max_element() <= 1.5 + 1e-4);
        }
    }

    #[test]
    fn test_edge_boundaries_frame_canvas() {
        let mut rng = Pcg32::seed_from_u64(4);
        let canvas = canvas();
        let edges = edge_boundaries(&canvas, &mut rng);
        assert_eq!(edges[0].a(), Vec2::new(1.0, 1.0));
        assert_eq!(edges[0].b(), Vec2::new(799.0, 1.0));
        assert_eq!(edges[1].b(), Vec2::new(799.0, 599.0));
        assert_eq!(edges[2].b(), Vec2::new(1.0, 599.0));
        assert_eq!(edges[3].b(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_random_speed_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        let canvas = canvas();
        for _ in 0..100 {
            let wall = Boundary::random(&canvas, &mut rng);
            assert!(wall.speed >= WALL_SPEED_MIN && wall.speed < WALL_SPEED_MAX);
            assert!(wall.phases.0.iter().all(|p| (0.0..NOISE_PHASE_RANGE).contains(p)));
        }
    }

    proptest! {
        #[test]
        fn prop_endpoints_stay_in_margin(
            seed in any::<u64>(),
            activations in prop::collection::vec(0.0f32..=1.0, 1..300),
        ) {
            let canvas = canvas();
            let mut rng = Pcg32::seed_from_u64(seed);
            let noise = DriftNoise::new(seed as u32);
            let mut walls: Vec<Boundary> = (0..3).map(|_| Boundary::random(&canvas, &mut rng)).collect();
            // Edge walls start outside the margin; one update pulls them in
            walls.extend(edge_boundaries(&canvas, &mut rng));

            for activation in activations.iter().copied().filter(|a| *a > 0.0) {
                for wall in walls.iter_mut() {
                    wall.update(activation, &canvas, &noise);
                    prop_assert!(in_bounds(wall.a(), &canvas));
                    prop_assert!(in_bounds(wall.b(), &canvas));
                }
            }
        }
    }
}
