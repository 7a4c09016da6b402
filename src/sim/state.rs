//! Game state and core simulation types
//!
//! Everything the presentation layer reads each tick lives here.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::EffectTimers;
use super::spawn::SpawnTimers;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    #[default]
    Title,
    /// Active run
    Play,
    /// Run ended, waiting for the restart input
    GameOver,
}

/// Axis-aligned rectangle in integer pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True if the interiors overlap. Rectangles that only share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Move this rect vertically so it lies inside `0..height`
    pub fn clamp_vertical(&mut self, height: i32) {
        self.y = self.y.clamp(0, (height - self.h).max(0));
    }
}

/// The player's token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_SIZE, PLAYER_SIZE),
        }
    }
}

impl Player {
    /// Apply held vertical input for one tick and keep the token on the pitch
    pub fn steer(&mut self, up: bool, down: bool) {
        if up {
            self.rect.y -= PLAYER_STEP;
        }
        if down {
            self.rect.y += PLAYER_STEP;
        }
        self.rect.clamp_vertical(PLAYFIELD_HEIGHT);
    }

    pub fn center(&self) -> IVec2 {
        self.rect.center()
    }
}

/// A red card scrolling toward the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub rect: Rect,
}

/// A gold trophy worth a point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub rect: Rect,
}

/// What triggered a particle burst (presentation picks the color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Hit,
    Collect,
}

/// A short-lived feedback dot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: IVec2,
    pub vel: IVec2,
    /// Remaining lifetime in ticks
    pub life: u32,
    pub kind: ParticleKind,
}

/// Background star, scrolls at its own pace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub pos: IVec2,
    pub speed: i32,
}

/// Per-run counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    pub lives: u32,
    /// Leftward scroll per tick for hazards and collectibles
    pub speed: i32,
    /// Consecutive pickups without a hit
    pub streak: u32,
    /// One-way unlock, see [`super::progression::unlock`]
    pub toon_mode: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
            speed: START_SPEED,
            streak: 0,
            toon_mode: false,
        }
    }
}

/// Notable things that happened during a tick.
///
/// Cleared at the start of every tick; drained by logging/audio hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted { run: u32 },
    Paused,
    Resumed,
    Hit { lives_left: u32 },
    Collected { score: u32, streak: u32 },
    SpeedUp { speed: i32 },
    StreakBonus { streak: u32 },
    Milestone { score: u32 },
    ToonModeUnlocked,
    GameOver { score: u32, best_score: u32, new_best: bool },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Freezes the simulation while in `Play`
    pub paused: bool,
    pub run: RunState,
    /// Best score of this process, survives restarts
    pub best_score: u32,
    /// Number of runs started since launch
    pub runs_started: u32,
    /// Unpaused ticks simulated in the current run
    pub time_ticks: u64,
    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub spawn: SpawnTimers,
    pub effects: EffectTimers,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state sitting on the title screen
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Title,
            paused: false,
            run: RunState::default(),
            best_score: 0,
            runs_started: 0,
            time_ticks: 0,
            player: Player::default(),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            particles: Vec::new(),
            stars: Vec::new(),
            spawn: SpawnTimers::default(),
            effects: EffectTimers::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset the run and enter `Play`. The best score is kept.
    pub fn start_run(&mut self) {
        self.run = RunState::default();
        self.paused = false;
        self.time_ticks = 0;
        self.player = Player::default();
        self.hazards.clear();
        self.collectibles.clear();
        self.particles.clear();
        self.stars.clear();
        self.spawn = SpawnTimers::default();
        self.effects = EffectTimers::default();
        self.runs_started += 1;
        self.phase = GamePhase::Play;

        log::info!("Run {} started (best so far: {})", self.runs_started, self.best_score);
        self.events.push(GameEvent::RunStarted {
            run: self.runs_started,
        });
    }

    /// Spawn a burst of particles around `at`
    pub fn emit_particles(&mut self, at: IVec2, kind: ParticleKind, rng: &mut impl Rng) {
        let (vmin, vmax) = PARTICLE_VELOCITY;
        let (lmin, lmax) = PARTICLE_LIFE;
        for _ in 0..PARTICLE_BURST {
            self.particles.push(Particle {
                pos: at,
                vel: IVec2::new(rng.random_range(vmin..=vmax), rng.random_range(vmin..=vmax)),
                life: rng.random_range(lmin..=lmax),
                kind,
            });
        }
    }

    /// True while the simulation is advancing
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Play && !self.paused
    }
}
