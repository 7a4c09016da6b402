//! Toon Dash - a single-screen football endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, scoring, game phases)
//! - `renderer`: Read-only scene building for whatever draws the frame
//! - `settings`: Player/driver preferences loaded from JSON
//! - `clock`: Fixed timestep frame clock

pub mod clock;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per real-time second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: i32 = 800;
    pub const PLAYFIELD_HEIGHT: i32 = 480;

    /// Player token
    pub const PLAYER_SIZE: i32 = 40;
    pub const PLAYER_START_X: i32 = 80;
    pub const PLAYER_START_Y: i32 = PLAYFIELD_HEIGHT / 2 - PLAYER_SIZE / 2;
    /// Vertical distance moved per tick while a direction is held
    pub const PLAYER_STEP: i32 = 6;

    /// Run defaults
    pub const START_LIVES: u32 = 3;
    pub const START_SPEED: i32 = 5;

    /// Spawn counters fire when they exceed these values (then reset to 0)
    pub const HAZARD_SPAWN_THRESHOLD: u32 = 55;
    pub const COLLECTIBLE_SPAWN_THRESHOLD: u32 = 120;
    pub const STAR_SPAWN_THRESHOLD: u32 = 15;

    /// Keeps hazards and collectibles off the very top/bottom edge
    pub const SPAWN_MARGIN: i32 = 40;

    /// Hazard geometry
    pub const WIDE_HAZARD_CHANCE: f64 = 0.25;
    pub const WIDE_HAZARD_WIDTH: (i32, i32) = (60, 110);
    pub const WIDE_HAZARD_HEIGHT: (i32, i32) = (18, 26);
    pub const SQUARE_HAZARD_SIZE: (i32, i32) = (25, 40);

    pub const COLLECTIBLE_SIZE: i32 = 26;
    pub const STAR_SPEED: (i32, i32) = (2, 5);

    /// Particle bursts
    pub const PARTICLE_BURST: usize = 10;
    pub const PARTICLE_VELOCITY: (i32, i32) = (-3, 3);
    pub const PARTICLE_LIFE: (u32, u32) = (10, 30);

    /// Effect timers (ticks)
    pub const INVINCIBILITY_TICKS: u32 = 90;
    pub const SHAKE_TICKS: u32 = 12;
    pub const BANNER_TICKS: u32 = 120;
    /// Player is drawn while `invincibility % FLASH_PERIOD < FLASH_VISIBLE`
    pub const FLASH_PERIOD: u32 = 6;
    pub const FLASH_VISIBLE: u32 = 3;
    /// Maximum screen shake offset per axis (pixels)
    pub const SHAKE_JITTER: i32 = 2;

    /// Progression
    pub const SPEED_UP_EVERY: u32 = 5;
    pub const STREAK_BONUS_EVERY: u32 = 5;
    pub const MILESTONE_EVERY: u32 = 10;
    pub const TOON_MODE_SCORE: u32 = 15;
    pub const TOON_MODE_EXTRA_LIVES: u32 = 1;
    pub const TOON_MODE_EXTRA_SPEED: i32 = 2;
}
