//! One level's worth of visibility state
//!
//! A `Scene` is rebuilt from scratch at every level start (and on resize
//! mid-level). Per frame it drifts the walls, refreshes every ray against the
//! full wall set, and re-evaluates whether the star can be seen.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boundary::{Boundary, edge_boundaries};
use super::canvas::Canvas;
use super::drift::DriftNoise;
use super::emitter::Emitter;
use super::level::LevelParams;
use super::segment::RayHit;
use super::target::Target;
use crate::error::{SimError, ensure_finite, ensure_finite_point};
use crate::tuning::Tuning;

/// Read-only view of the star for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub pos: Vec2,
    pub visible: bool,
    pub visual_radius: f32,
    pub pulse_angle: f32,
    pub pulse_size: f32,
    pub pulse_alpha: f32,
}

impl From<&Target> for TargetView {
    fn from(t: &Target) -> Self {
        Self {
            pos: t.pos,
            visible: t.visible,
            visual_radius: t.visual_radius,
            pulse_angle: t.pulse_angle,
            pulse_size: t.pulse_size(),
            pulse_alpha: t.pulse_alpha(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub canvas: Canvas,
    pub origin: Vec2,
    pub boundaries: &'a [Boundary],
    /// Nearest hit per ray; `None` rays escaped and are not drawn
    pub hits: &'a [Option<RayHit>],
    pub target: TargetView,
    pub level: u32,
    pub max_levels: u32,
    pub reveal_distance: f32,
}

/// Walls, emitter and star for the level being played
#[derive(Debug, Clone)]
pub struct Scene {
    canvas: Canvas,
    params: LevelParams,
    max_levels: u32,
    boundaries: Vec<Boundary>,
    emitter: Emitter,
    target: Target,
    noise: DriftNoise,
    /// Star stops once collected
    target_moving: bool,
    rng: Pcg32,
}

impl Scene {
    /// Build a fresh level: random walls plus the four edge walls, emitter at
    /// the canvas center, star at a random spot
    pub fn start(level: u32, canvas: Canvas, tuning: &Tuning, seed: u64) -> Result<Self, SimError> {
        let params = LevelParams::for_level(level, tuning)?;
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut boundaries = Vec::with_capacity(params.total_boundaries());
        for _ in 0..params.wall_count {
            boundaries.push(Boundary::random(&canvas, &mut rng));
        }
        boundaries.extend(edge_boundaries(&canvas, &mut rng));

        let emitter = Emitter::new(canvas.center(), tuning.ray_angle_increment)?;
        let target = Target::spawn(&canvas, params.star_speed, &mut rng);
        let noise = DriftNoise::new(rng.random());

        log::info!(
            "Level {} - Walls: {}, Speed: {:.3}, RevealDist: {}",
            level,
            params.wall_count,
            params.star_speed,
            params.reveal_distance
        );

        Ok(Self {
            canvas,
            params,
            max_levels: tuning.max_levels,
            boundaries,
            emitter,
            target,
            noise,
            target_moving: true,
            rng,
        })
    }

    /// Advance one frame
    ///
    /// Order: emitter follows the pointer, walls drift, rays refresh against
    /// the drifted walls, the star's visibility is evaluated, then the star
    /// moves. `activation` is clamped into [0, 1]. A rejected frame leaves
    /// the scene untouched.
    pub fn frame(&mut self, input_pos: Vec2, activation: f32) -> Result<FrameView<'_>, SimError> {
        let input_pos = ensure_finite_point(input_pos, "input position")?;
        let activation = ensure_finite(activation, "activation level")?.clamp(0.0, 1.0);
        if self.boundaries.is_empty() {
            return Err(SimError::EmptyBoundarySet);
        }

        self.emitter.set_origin(input_pos);

        for wall in self.boundaries.iter_mut() {
            wall.update(activation, &self.canvas, &self.noise);
        }

        self.emitter.refresh(&self.boundaries)?;

        self.target
            .update_visibility(self.emitter.origin, self.params.reveal_distance);
        if self.target_moving {
            self.target.advance(&self.canvas, &mut self.rng);
        }

        log::debug!(
            "frame: origin={:?} hits={}/{} star_visible={}",
            input_pos,
            self.emitter.hit_count(),
            self.emitter.rays().len(),
            self.target.visible
        );

        Ok(self.view())
    }

    /// Current geometry without advancing anything
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            canvas: self.canvas,
            origin: self.emitter.origin,
            boundaries: &self.boundaries,
            hits: self.emitter.hits(),
            target: TargetView::from(&self.target),
            level: self.params.level,
            max_levels: self.max_levels,
            reveal_distance: self.params.reveal_distance,
        }
    }

    /// Did a click at `pointer` land on the star? No state changes.
    pub fn hit_test(&self, pointer: Vec2) -> Result<bool, SimError> {
        let pointer = ensure_finite_point(pointer, "pointer position")?;
        Ok(self.target.hit_test(pointer))
    }

    /// Freeze the star in place (after it has been collected)
    pub fn stop_target(&mut self) {
        self.target_moving = false;
    }

    pub fn params(&self) -> &LevelParams {
        &self.params
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Mutable star access for scripted setups
    pub fn target_mut(&mut self) -> &mut Target {
        &mut self.target
    }

    /// Replace the wall set (scripted layouts, tests)
    pub fn set_boundaries(&mut self, boundaries: Vec<Boundary>) {
        self.boundaries = boundaries;
    }
}
