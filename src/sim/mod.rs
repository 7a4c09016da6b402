//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only from the caller-supplied RNG
//! - Stable iteration order (insertion order of each entity list)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{Steering, steer};
pub use effects::{Banner, EffectTimers};
pub use progression::{BannerKind, PendingBanner, collect, hit, pick_up, unlock};
pub use spawn::SpawnTimers;
pub use state::{
    Collectible, GameEvent, GamePhase, GameState, Hazard, Particle, ParticleKind, Player, Rect,
    RunState, Star,
};
pub use tick::{TickInput, tick};
