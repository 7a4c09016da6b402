//! Toon Dash entry point
//!
//! Headless native driver: runs the simulation on the fixed timestep with
//! the idle AI at the controls, logs what happens and prints a JSON summary
//! of the session on exit.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use toon_dash::renderer::{self, Scene};
use toon_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use toon_dash::{FrameClock, Settings};

/// Outcome of one finished run
#[derive(Debug, Clone, Serialize)]
struct RunRecord {
    run: u32,
    score: u32,
    ticks: u64,
    toon_mode: bool,
}

#[derive(Debug, Serialize)]
struct SessionSummary {
    seed: u64,
    ticks: u64,
    best_score: u32,
    runs: Vec<RunRecord>,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    seed: u64,
    /// Drives the simulation
    sim_rng: Pcg32,
    /// Drives presentation-only randomness (shake), kept apart so drawing
    /// never changes the simulation
    fx_rng: Pcg32,
    input: TickInput,
    total_ticks: u64,
    finished: Vec<RunRecord>,
    scene: Scene,
}

impl Game {
    fn new(seed: u64, settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            settings,
            seed,
            sim_rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed.wrapping_add(1)),
            input: TickInput::default(),
            total_ticks: 0,
            finished: Vec::new(),
            scene: Scene::default(),
        }
    }

    /// Press keys the way a player at the title/game over screen would
    fn poll_input(&mut self) {
        let wants_more_runs =
            self.settings.runs == 0 || (self.finished.len() as u32) < self.settings.runs;
        let out_of_time =
            self.settings.max_ticks > 0 && self.total_ticks >= self.settings.max_ticks;

        self.input = TickInput {
            start: matches!(self.state.phase, GamePhase::Title | GamePhase::GameOver)
                && wants_more_runs,
            autopilot: self.settings.autopilot,
            quit: out_of_time
                || (!wants_more_runs && self.state.phase == GamePhase::GameOver),
            ..Default::default()
        };
    }

    /// Run one tick; returns false once the driver should stop
    fn step(&mut self) -> bool {
        self.poll_input();
        if self.input.quit {
            return false;
        }

        tick(&mut self.state, &self.input, &mut self.sim_rng);
        self.total_ticks += 1;

        for event in self.state.events.clone() {
            self.on_event(&event);
        }

        let jitter = renderer::roll_jitter(&self.state, &self.settings, &mut self.fx_rng);
        self.scene = renderer::build_scene(&self.state, jitter, &self.settings);
        if self.total_ticks % 600 == 0 {
            log::debug!(
                "tick {}: {} vertices, {} texts",
                self.total_ticks,
                self.scene.vertices.len(),
                self.scene.texts.len()
            );
        }
        true
    }

    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameOver { score, .. } => {
                self.finished.push(RunRecord {
                    run: self.state.runs_started,
                    score: *score,
                    ticks: self.state.time_ticks,
                    toon_mode: self.state.run.toon_mode,
                });
            }
            GameEvent::Milestone { score } => log::info!("Milestone: {}", score),
            other => log::debug!("{:?}", other),
        }
    }

    fn run(&mut self) {
        if self.settings.realtime {
            let mut clock = FrameClock::default();
            'frames: loop {
                for _ in 0..clock.wait() {
                    if !self.step() {
                        break 'frames;
                    }
                }
            }
        } else {
            while self.step() {}
        }
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            ticks: self.total_ticks,
            best_score: self.state.best_score,
            runs: self.finished.clone(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Toon Dash (native) starting...");

    let settings = Settings::load().unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        Settings::default()
    });

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(seed, settings);
    game.run();

    let summary = game.summary();
    log::info!(
        "Session over after {} ticks, {} runs, best score {}",
        summary.ticks,
        summary.runs.len(),
        summary.best_score
    );
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize summary: {e}"),
    }
}
