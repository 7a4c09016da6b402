//! Timed visual-effect state
//!
//! Countdowns consumed by presentation. They only tick while the run is
//! advancing, so pausing freezes them.

use serde::{Deserialize, Serialize};

use crate::consts::{BANNER_TICKS, FLASH_PERIOD, FLASH_VISIBLE, INVINCIBILITY_TICKS, SHAKE_TICKS};

/// A timed on-screen message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub ticks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTimers {
    /// Hazard contact is ignored while non-zero
    pub invincibility: u32,
    pub shake: u32,
    pub banner: Banner,
}

impl EffectTimers {
    /// Start the post-hit invincibility and shake windows
    pub fn start_hit_recovery(&mut self) {
        self.invincibility = INVINCIBILITY_TICKS;
        self.shake = SHAKE_TICKS;
    }

    pub fn show_banner(&mut self, text: impl Into<String>) {
        self.banner = Banner {
            text: text.into(),
            ticks: BANNER_TICKS,
        };
    }

    /// Count every timer down by one tick, stopping at zero
    pub fn tick_down(&mut self) {
        self.invincibility = self.invincibility.saturating_sub(1);
        self.shake = self.shake.saturating_sub(1);
        self.banner.ticks = self.banner.ticks.saturating_sub(1);
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0
    }

    /// Flash pattern while invincible; always visible otherwise
    pub fn player_visible(&self) -> bool {
        self.invincibility % FLASH_PERIOD < FLASH_VISIBLE
    }

    pub fn is_shaking(&self) -> bool {
        self.shake > 0
    }

    /// Banner text if one should be on screen
    pub fn active_banner(&self) -> Option<&str> {
        (self.banner.ticks > 0 && !self.banner.text.is_empty()).then_some(self.banner.text.as_str())
    }
}
