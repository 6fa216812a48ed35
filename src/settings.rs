//! Startup settings
//!
//! Read once from a JSON file at launch. Missing fields take their defaults,
//! so a file only needs the keys it wants to change. Nothing is written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::DisplayMode;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "LANE_RUSH_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("resolution list is empty")]
    NoResolutions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start in desktop fullscreen
    pub fullscreen: bool,

    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Windowed sizes the options screen cycles through
    pub resolutions: Vec<(u32, u32)>,

    /// Fixed seed for obstacle lanes; `None` seeds from the clock
    pub rng_seed: Option<u64>,

    /// Frames the headless demo runs before quitting on its own
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: false,
            window_width: 960,
            window_height: 540,
            resolutions: vec![(960, 540), (1280, 720), (1600, 900), (1920, 1080)],
            rng_seed: None,
            demo_frames: 3600,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.resolutions.is_empty() {
            return Err(SettingsError::NoResolutions);
        }
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `LANE_RUSH_SETTINGS`, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// Display mode to open the window with
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode {
            fullscreen: self.fullscreen,
            windowed_size: (self.window_width, self.window_height),
        }
    }
}
