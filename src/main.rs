//! Star Seeker entry point
//!
//! Headless native driver: sweeps a scripted pointer across the canvas,
//! clicks the star whenever it shows, and steps through every level while
//! logging what the UI layer would react to.

use std::time::Instant;

use glam::Vec2;

use star_seeker::platform::{canvas_for_window, wall_activation};
use star_seeker::renderer::FrameMesh;
use star_seeker::sim::{Canvas, GameEvent, GamePhase, GameState};
use star_seeker::{SimError, Tuning};

/// Frame budget at 60 Hz
const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

/// Command line options
#[derive(Debug)]
struct Options {
    seed: u64,
    frames: u32,
    width: u32,
    height: u32,
    tuning_path: Option<String>,
    dump_tuning: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 12345,
            frames: 20_000,
            width: 1280,
            height: 720,
            tuning_path: None,
            dump_tuning: false,
        }
    }
}

impl Options {
    fn parse() -> Self {
        let mut opts = Self::default();
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => opts.seed = parse_next(&mut args, "--seed", opts.seed),
                "--frames" => opts.frames = parse_next(&mut args, "--frames", opts.frames),
                "--width" => opts.width = parse_next(&mut args, "--width", opts.width),
                "--height" => opts.height = parse_next(&mut args, "--height", opts.height),
                "--tuning" => opts.tuning_path = args.next(),
                "--dump-tuning" => opts.dump_tuning = true,
                other => log::warn!("Ignoring unknown argument {other}"),
            }
        }
        opts
    }
}

fn parse_next<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
    fallback: T,
) -> T {
    match args.next().map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            log::warn!("Bad or missing value for {flag}, keeping default");
            fallback
        }
    }
}

/// Load tuning from a file, falling back to defaults on any problem
fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Tuning file {path} rejected: {e}");
                Tuning::default()
            }
        },
        Err(e) => {
            log::error!("Could not read tuning file {path}: {e}");
            Tuning::default()
        }
    }
}

/// Driver instance holding the session and frame stats
struct Game {
    state: GameState,
    canvas: Canvas,
    frame: u32,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    worst_ms: f64,
    over_budget: u32,
    triangles: usize,
}

impl Game {
    fn new(seed: u64, tuning: Tuning, canvas: Canvas) -> Result<Self, SimError> {
        Ok(Self {
            state: GameState::new(seed, tuning, canvas)?,
            canvas,
            frame: 0,
            frame_times: [0.0; 60],
            frame_index: 0,
            worst_ms: 0.0,
            over_budget: 0,
            triangles: 0,
        })
    }

    /// Scripted pointer: a slow Lissajous sweep over most of the canvas
    fn pointer(&self) -> Vec2 {
        let t = self.frame as f32 * 0.004;
        let c = self.canvas.center();
        Vec2::new(
            c.x + 0.45 * self.canvas.width * (t * 1.3).sin(),
            c.y + 0.45 * self.canvas.height * (t * 0.7 + 0.5).cos(),
        )
    }

    /// One frame: simulate, build geometry, click the star if it shows
    fn update(&mut self) -> Result<(), SimError> {
        let pointer = self.pointer();
        let activation = wall_activation(pointer, &self.canvas, &self.state.tuning);

        let started = Instant::now();
        let simulated = self.state.frame(pointer, self.canvas, activation)?.is_some();
        let mut click_at = None;
        if simulated {
            if let Some(scene) = self.state.scene() {
                let view = scene.view();
                let mesh = FrameMesh::build(&view, &self.state.starfield);
                self.triangles = mesh.triangle_count();
                click_at = view.target.visible.then_some(view.target.pos);
            }
        }
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.record_frame_time(elapsed_ms);

        if let Some(star) = click_at {
            self.state.click(star)?;
        }

        self.frame += 1;
        Ok(())
    }

    fn record_frame_time(&mut self, ms: f64) {
        self.frame_times[self.frame_index] = ms;
        self.frame_index = (self.frame_index + 1) % 60;
        self.worst_ms = self.worst_ms.max(ms);
        if ms > FRAME_BUDGET_MS {
            self.over_budget += 1;
        }
    }

    fn average_ms(&self) -> f64 {
        let n = (self.frame as usize).min(60).max(1);
        self.frame_times.iter().take(n).sum::<f64>() / n as f64
    }

    /// React to session events the way the UI layer would
    fn handle_events(&mut self) -> Result<(), SimError> {
        for event in self.state.drain_events() {
            match event {
                GameEvent::GameStarted => log::info!("[ui] hide intro, start music"),
                GameEvent::LevelStarted { level } => {
                    log::info!("[ui] Level: {} / {}", level, self.state.tuning.max_levels)
                }
                GameEvent::StarCollected { level } => {
                    log::info!("[ui] collect sound (level {level})")
                }
                GameEvent::LevelComplete { level } => {
                    log::info!("[ui] Level {level} Complete! (frame {})", self.frame);
                    log::info!("[ui] level-up sound");
                    self.state.next_level()?;
                }
                GameEvent::GameComplete => log::info!("[ui] final win screen"),
                GameEvent::LevelReset { level } => log::info!("[ui] level {level} rebuilt"),
            }
        }
        Ok(())
    }
}

fn run(opts: Options) -> Result<(), SimError> {
    let tuning = load_tuning(opts.tuning_path.as_deref());
    if opts.dump_tuning {
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    let canvas = canvas_for_window(opts.width, opts.height)?;
    let mut game = Game::new(opts.seed, tuning, canvas)?;
    log::info!("Game initialized with seed: {}", opts.seed);

    game.state.start_game()?;
    game.handle_events()?;

    while game.frame < opts.frames && game.state.phase != GamePhase::Finished {
        game.update()?;
        game.handle_events()?;
    }

    if game.state.phase == GamePhase::Finished {
        log::info!("All {} levels cleared in {} frames", game.state.tuning.max_levels, game.frame);
    } else {
        log::warn!(
            "Stopped after {} frames on level {} ({:?})",
            game.frame,
            game.state.level,
            game.state.phase
        );
    }
    log::info!(
        "Frame time: avg {:.3} ms (last 60), worst {:.3} ms, {} over budget, last mesh {} triangles",
        game.average_ms(),
        game.worst_ms,
        game.over_budget,
        game.triangles
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Star Seeker (headless) starting...");

    if let Err(e) = run(Options::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
