//! Deterministic visibility core
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only (one `Pcg32` per session, one per scene)
//! - Stable iteration order (walls and rays in construction order)
//! - One thread, one full recomputation per frame
//! - No rendering or platform dependencies

pub mod boundary;
pub mod canvas;
pub mod drift;
pub mod emitter;
pub mod level;
pub mod scene;
pub mod segment;
pub mod starfield;
pub mod state;
pub mod target;

pub use boundary::{Boundary, DriftPhases, edge_boundaries};
pub use canvas::Canvas;
pub use drift::DriftNoise;
pub use emitter::{Emitter, Ray};
pub use level::{EDGE_WALL_COUNT, LevelParams};
pub use scene::{FrameView, Scene, TargetView};
pub use segment::{RayHit, Segment};
pub use starfield::{BackgroundStar, Starfield};
pub use state::{GameEvent, GamePhase, GameState};
pub use target::Target;
