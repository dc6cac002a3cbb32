//! Session state and the game-flow state machine
//!
//! Intro → Playing → Won → Playing (next level) → … → Finished, with a
//! restart back to level 1 from anywhere. Frames only run while Playing.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use super::scene::{FrameView, Scene};
use super::starfield::Starfield;
use crate::error::{SimError, ensure_finite_point};
use crate::tuning::Tuning;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title overlay, nothing simulated yet
    Intro,
    /// Active level
    Playing,
    /// Level cleared, waiting for "next level"
    Won,
    /// Last level cleared
    Finished,
}

/// Things the UI layer may want to react to (sounds, overlays)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh run from level 1
    GameStarted,
    /// A level has been built and is now playing
    LevelStarted { level: u32 },
    /// The star was clicked
    StarCollected { level: u32 },
    /// A non-final level was cleared
    LevelComplete { level: u32 },
    /// The final level was cleared
    GameComplete,
    /// The level was rebuilt after a resize
    LevelReset { level: u32 },
}

/// Whole-session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Current level (1-based); already advanced while in `Won`
    pub level: u32,
    pub phase: GamePhase,
    pub canvas: Canvas,
    pub starfield: Starfield,
    scene: Option<Scene>,
    events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// New session sitting on the intro overlay
    pub fn new(seed: u64, tuning: Tuning, canvas: Canvas) -> Result<Self, SimError> {
        tuning.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let starfield = Starfield::generate(&canvas, tuning.background_star_count, &mut rng);
        log::info!("Session created with seed: {}", seed);
        Ok(Self {
            seed,
            tuning,
            level: 1,
            phase: GamePhase::Intro,
            canvas,
            starfield,
            scene: None,
            events: Vec::new(),
            rng,
        })
    }

    /// Start (or restart) the run at level 1
    pub fn start_game(&mut self) -> Result<(), SimError> {
        log::info!("Starting game at Level 1");
        self.level = 1;
        self.events.push(GameEvent::GameStarted);
        self.enter_playing()
    }

    /// Restart from any phase
    pub fn restart(&mut self) -> Result<(), SimError> {
        log::info!("Restart from {:?} at level {}", self.phase, self.level);
        self.start_game()
    }

    /// Won → Playing on the next level. Returns false in any other phase.
    pub fn next_level(&mut self) -> Result<bool, SimError> {
        if self.phase != GamePhase::Won {
            log::warn!("next_level ignored in phase {:?}", self.phase);
            return Ok(false);
        }
        self.enter_playing()?;
        Ok(true)
    }

    /// Build the scene for `self.level` and switch to Playing
    fn enter_playing(&mut self) -> Result<(), SimError> {
        log::info!("Initializing Level {}", self.level);
        if self.starfield.is_stale(&self.canvas) {
            self.regenerate_starfield();
        }
        let seed = self.rng.random();
        self.scene = Some(Scene::start(self.level, self.canvas, &self.tuning, seed)?);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted { level: self.level });
        Ok(())
    }

    fn regenerate_starfield(&mut self) {
        self.starfield =
            Starfield::generate(&self.canvas, self.tuning.background_star_count, &mut self.rng);
    }

    /// Advance one frame
    ///
    /// Returns `None` while an overlay is up (not Playing). A canvas that
    /// differs from the current one is handled as a resize first.
    pub fn frame(
        &mut self,
        input_pos: Vec2,
        canvas: Canvas,
        activation: f32,
    ) -> Result<Option<FrameView<'_>>, SimError> {
        if canvas != self.canvas {
            self.resize(canvas)?;
        }
        if self.phase != GamePhase::Playing {
            return Ok(None);
        }
        match self.scene.as_mut() {
            Some(scene) => scene.frame(input_pos, activation).map(Some),
            None => Ok(None),
        }
    }

    /// Pointer click. Returns true if it collected the star.
    pub fn click(&mut self, pointer: Vec2) -> Result<bool, SimError> {
        let pointer = ensure_finite_point(pointer, "pointer position")?;
        if self.phase != GamePhase::Playing {
            return Ok(false);
        }
        let Some(scene) = self.scene.as_mut() else {
            return Ok(false);
        };
        if !scene.hit_test(pointer)? {
            return Ok(false);
        }

        scene.stop_target();
        let completed = self.level;
        log::info!("Star Clicked! Level {} complete.", completed);
        self.events.push(GameEvent::StarCollected { level: completed });

        if completed >= self.tuning.max_levels {
            self.phase = GamePhase::Finished;
            self.events.push(GameEvent::GameComplete);
            log::info!("All levels completed!");
        } else {
            self.phase = GamePhase::Won;
            self.level += 1;
            self.events.push(GameEvent::LevelComplete { level: completed });
            log::info!("Proceeding to Level {}", self.level);
        }
        Ok(true)
    }

    /// New canvas size: fresh background, and a rebuilt level if one is in play
    pub fn resize(&mut self, canvas: Canvas) -> Result<(), SimError> {
        log::info!("Canvas resized to {}x{}", canvas.width, canvas.height);
        self.canvas = canvas;
        self.regenerate_starfield();
        if self.phase == GamePhase::Playing {
            log::info!("Resizing during play - re-initializing level {}", self.level);
            self.enter_playing()?;
            self.events.push(GameEvent::LevelReset { level: self.level });
        }
        Ok(())
    }

    /// The level being played (also kept while Won/Finished until rebuilt)
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 600.0).unwrap()
    }

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, Tuning::default(), canvas()).unwrap()
    }

    fn click_star(state: &mut GameState) -> bool {
        let star = state.scene().unwrap().target().pos;
        state.click(star).unwrap()
    }

    #[test]
    fn test_starts_in_intro() {
        let mut state = new_state(1);
        assert_eq!(state.phase, GamePhase::Intro);
        assert!(state.scene().is_none());
        assert_eq!(state.starfield.stars.len(), 200);
        // No frames on the intro overlay
        assert!(state.frame(Vec2::new(400.0, 300.0), canvas(), 0.0).unwrap().is_none());
        assert!(!state.click(Vec2::new(400.0, 300.0)).unwrap());
    }

    #[test]
    fn test_full_run() {
        let mut state = new_state(2);
        state.start_game().unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameStarted, GameEvent::LevelStarted { level: 1 }]
        );

        for level in 1..=2 {
            assert!(click_star(&mut state));
            assert_eq!(state.phase, GamePhase::Won);
            assert_eq!(state.level, level + 1);
            assert_eq!(
                state.drain_events(),
                vec![
                    GameEvent::StarCollected { level },
                    GameEvent::LevelComplete { level }
                ]
            );
            // Paused while the overlay is up
            assert!(state.frame(Vec2::new(400.0, 300.0), canvas(), 0.0).unwrap().is_none());

            assert!(state.next_level().unwrap());
            assert_eq!(state.phase, GamePhase::Playing);
            assert_eq!(state.scene().unwrap().params().level, level + 1);
            state.drain_events();
        }

        assert!(click_star(&mut state));
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::StarCollected { level: 3 }, GameEvent::GameComplete]
        );
        assert!(!state.next_level().unwrap());

        state.restart().unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut state = new_state(3);
        state.start_game().unwrap();
        state.drain_events();
        let star = state.scene().unwrap().target().pos;
        let far = if star.x > 400.0 { Vec2::new(10.0, 10.0) } else { Vec2::new(790.0, 590.0) };
        assert!(!state.click(far).unwrap());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_next_level_ignored_while_playing() {
        let mut state = new_state(4);
        state.start_game().unwrap();
        assert!(!state.next_level().unwrap());
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_restart_from_won() {
        let mut state = new_state(5);
        state.start_game().unwrap();
        assert!(click_star(&mut state));
        assert_eq!(state.phase, GamePhase::Won);
        state.restart().unwrap();
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_frame_while_playing() {
        let mut state = new_state(6);
        state.start_game().unwrap();
        let view = state
            .frame(Vec2::new(400.0, 300.0), canvas(), 0.3)
            .unwrap()
            .unwrap();
        assert_eq!(view.hits.len(), 360);
        assert_eq!(view.boundaries.len(), 9);
        assert_eq!(view.origin, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_resize_mid_level_rebuilds() {
        let mut state = new_state(7);
        state.start_game().unwrap();
        state.drain_events();
        let old_walls = state.scene().unwrap().boundaries().to_vec();

        let bigger = Canvas::new(1024.0, 768.0).unwrap();
        let view = state.frame(Vec2::new(512.0, 384.0), bigger, 0.0).unwrap().unwrap();
        assert_eq!(view.canvas, bigger);
        assert_ne!(view.boundaries, old_walls.as_slice());

        assert_eq!(state.starfield.canvas_width, 1024.0);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::LevelStarted { level: 1 }, GameEvent::LevelReset { level: 1 }]
        );
    }

    #[test]
    fn test_resize_on_overlay_keeps_phase() {
        let mut state = new_state(8);
        state.resize(Canvas::new(1024.0, 768.0).unwrap()).unwrap();
        assert_eq!(state.phase, GamePhase::Intro);
        assert!(state.scene().is_none());
        assert_eq!(state.starfield.canvas_width, 1024.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            max_levels: 0,
            ..Tuning::default()
        };
        assert!(GameState::new(1, tuning, canvas()).is_err());
    }

    #[test]
    fn test_deterministic_sessions() {
        let mut a = new_state(99);
        let mut b = new_state(99);
        a.start_game().unwrap();
        b.start_game().unwrap();

        let path = [(300.0, 200.0, 0.0), (350.0, 260.0, 0.5), (620.0, 80.0, 1.0)];
        for (x, y, act) in path {
            let va = a.frame(Vec2::new(x, y), canvas(), act).unwrap().unwrap();
            let hits_a: Vec<_> = va.hits.to_vec();
            let star_a = va.target;
            let vb = b.frame(Vec2::new(x, y), canvas(), act).unwrap().unwrap();
            assert_eq!(hits_a.as_slice(), vb.hits);
            assert_eq!(star_a, vb.target);
        }
    }
}
