//! Idle/demo mode - the game plays itself
//!
//! Produces the same held up/down inputs a player would, so the simulation
//! treats an autopiloted run exactly like a human one.

use super::state::{GameState, Rect};
use crate::consts::{PLAYER_STEP, PLAYFIELD_HEIGHT};

/// How many ticks ahead hazards are considered a threat
const LOOKAHEAD_TICKS: i32 = 30;
/// Extra vertical clearance wanted around hazards
const DODGE_MARGIN: i32 = 12;

/// Held vertical input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steering {
    pub up: bool,
    pub down: bool,
}

impl Steering {
    const UP: Self = Self {
        up: true,
        down: false,
    };
    const DOWN: Self = Self {
        up: false,
        down: true,
    };
    const HOLD: Self = Self {
        up: false,
        down: false,
    };
}

/// Decide which way to move: dodge the closest threatening hazard,
/// otherwise line up with the closest collectible, otherwise drift back to
/// the middle of the pitch.
pub fn steer(state: &GameState) -> Steering {
    let player = state.player.rect;
    let reach = player.right() + state.run.speed * LOOKAHEAD_TICKS;

    let danger_top = player.y - DODGE_MARGIN;
    let danger_bottom = player.bottom() + DODGE_MARGIN;

    let threat = state
        .hazards
        .iter()
        .filter(|h| h.rect.right() >= player.x && h.rect.x <= reach)
        .filter(|h| h.rect.y < danger_bottom && h.rect.bottom() > danger_top)
        .min_by_key(|h| h.rect.x);

    if let Some(hazard) = threat {
        return dodge(&player, &hazard.rect);
    }

    let target_y = state
        .collectibles
        .iter()
        .filter(|c| c.rect.right() >= player.x)
        .min_by_key(|c| c.rect.x)
        .map(|c| c.rect.center().y)
        .unwrap_or(PLAYFIELD_HEIGHT / 2);

    let dy = target_y - player.center().y;
    if dy < -PLAYER_STEP / 2 {
        Steering::UP
    } else if dy > PLAYER_STEP / 2 {
        Steering::DOWN
    } else {
        Steering::HOLD
    }
}

fn dodge(player: &Rect, hazard: &Rect) -> Steering {
    let go_down = hazard.center().y < player.center().y;
    // Pinned against an edge: the only way out is the other way
    if go_down && player.bottom() >= PLAYFIELD_HEIGHT {
        Steering::UP
    } else if !go_down && player.y <= 0 {
        Steering::DOWN
    } else if go_down {
        Steering::DOWN
    } else {
        Steering::UP
    }
}
