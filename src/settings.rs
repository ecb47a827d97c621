//! Session settings
//!
//! Read as JSON: from LocalStorage on web, from a file on native.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_WINNING_SCORE, TICK_HZ};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("winning score must be at least 1")]
    ZeroWinningScore,
    #[error("tick rate must be at least 1")]
    ZeroTickRate,
    #[error("volume {0} outside 0.0 - 1.0")]
    VolumeOutOfRange(f32),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points needed to win a match
    pub winning_score: u32,
    /// Simulation ticks per second
    pub tick_hz: u32,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            tick_hz: TICK_HZ,
            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Fixed timestep for `tick_hz`
    pub fn sim_dt(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.winning_score == 0 {
            return Err(SettingsError::ZeroWinningScore);
        }
        if self.tick_hz == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(SettingsError::VolumeOutOfRange(self.master_volume));
        }
        Ok(())
    }

    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pong_classic_settings";

    /// Settings file used when `PONG_SETTINGS` is unset
    pub const DEFAULT_PATH: &'static str = "pong_settings.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Read a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Native: `$PONG_SETTINGS` or `pong_settings.json`; defaults if absent or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::env::var("PONG_SETTINGS").unwrap_or_else(|_| Self::DEFAULT_PATH.to_string());
        let path = std::path::Path::new(&path);
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
