//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically and
//! drives the title -> play -> game over phase machine.

use rand::Rng;

use super::autopilot;
use super::collision::{advance_collectibles, advance_hazards, advance_particles, advance_stars};
use super::progression::{hit, pick_up};
use super::spawn::run_spawners;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start from the title screen / restart after game over (space)
    pub start: bool,
    /// Pause toggle (only honored during play)
    pub pause: bool,
    /// Move up (held)
    pub up: bool,
    /// Move down (held)
    pub down: bool,
    /// Quit request. Handled by the driver; the simulation never sees it.
    pub quit: bool,
    /// Idle/demo mode - AI steers instead of `up`/`down`
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) {
    state.events.clear();

    match state.phase {
        GamePhase::Title | GamePhase::GameOver => {
            if !input.start {
                return;
            }
            // The first frame of the new run is simulated right away
            state.start_run();
        }
        GamePhase::Play => {}
    }

    if input.pause {
        state.paused = !state.paused;
        if state.paused {
            log::info!("Paused");
            state.events.push(GameEvent::Paused);
        } else {
            log::info!("Resumed");
            state.events.push(GameEvent::Resumed);
        }
    }

    // Pause freezes everything time-dependent for this tick
    if state.paused {
        return;
    }

    state.time_ticks += 1;

    let (up, down) = if input.autopilot {
        let steering = autopilot::steer(state);
        (steering.up, steering.down)
    } else {
        (input.up, input.down)
    };
    state.player.steer(up, down);

    run_spawners(state, rng);
    advance_stars(&mut state.stars);

    let player = state.player.rect;
    let speed = state.run.speed;

    let struck = advance_hazards(
        &mut state.hazards,
        &player,
        speed,
        state.effects.is_invincible(),
    );
    if let Some(hazard) = struck {
        log::trace!("Hazard {} struck the player", hazard.id);
        hit(state, rng);
    }

    let picked = advance_collectibles(&mut state.collectibles, &player, speed);
    for item in picked {
        // Pickups after the final hit of a run don't count
        if state.phase != GamePhase::Play {
            break;
        }
        log::trace!("Collectible {} picked up", item.id);
        pick_up(state, rng);
    }

    advance_particles(&mut state.particles);
    state.effects.tick_down();
}
