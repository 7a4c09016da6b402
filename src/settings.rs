//! Game settings and preferences
//!
//! Loaded from the JSON file named by `TOON_DASH_SETTINGS`. Missing fields
//! fall back to their defaults; nothing is ever written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable pointing at a settings file
pub const SETTINGS_ENV: &str = "TOON_DASH_SETTINGS";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Driver ===
    /// RNG seed; random per launch when unset
    pub seed: Option<u64>,
    /// Block on the 60 Hz frame clock instead of running flat out
    pub realtime: bool,
    /// Stop after this many ticks (0 = no limit)
    pub max_ticks: u64,
    /// Stop after this many finished runs (0 = no limit)
    pub runs: u32,
    /// Let the idle AI play
    pub autopilot: bool,

    // === Visual Effects ===
    /// Screen shake when hit
    pub screen_shake: bool,
    /// Particle bursts on hits/pickups
    pub particles: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            realtime: false,
            max_ticks: 60 * 60 * 10,
            runs: 3,
            autopilot: true,

            screen_shake: true,
            particles: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by [`SETTINGS_ENV`], or defaults if unset
    pub fn load() -> Result<Self, SettingsError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}
