//! Coherent noise for wall drift
//!
//! Walls wander by sampling Perlin noise along an advancing phase. Exact
//! motion is not part of any contract, only that it is smooth and bounded.

use noise::{NoiseFn, Perlin};

/// Second Perlin axis is pinned off the integer lattice so the 1D slice
/// never collapses to zero at integer phases
const SLICE_Y: f64 = 0.5;

/// Smooth pseudo-random scalar in [0, 1] as a function of phase
#[derive(Clone)]
pub struct DriftNoise {
    perlin: Perlin,
}

impl std::fmt::Debug for DriftNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriftNoise").finish_non_exhaustive()
    }
}

impl DriftNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Noise value at `phase`, centered on 0.5
    #[inline]
    pub fn sample(&self, phase: f32) -> f32 {
        let v = self.perlin.get([phase as f64, SLICE_Y]);
        ((v * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_in_unit_range() {
        let noise = DriftNoise::new(42);
        for i in 0..2000 {
            let v = noise.sample(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        let a = DriftNoise::new(9);
        let b = DriftNoise::new(9);
        for i in 0..100 {
            let phase = 123.0 + i as f32 * 0.01;
            assert_eq!(a.sample(phase), b.sample(phase));
        }
    }

    #[test]
    fn test_sample_is_smooth() {
        // Neighbouring phases one drift step apart stay close together
        let noise = DriftNoise::new(3);
        let mut prev = noise.sample(500.0);
        for i in 1..1000 {
            let v = noise.sample(500.0 + i as f32 * 0.01);
            assert!((v - prev).abs() < 0.05, "jump {} at step {}", (v - prev).abs(), i);
            prev = v;
        }
    }
}
