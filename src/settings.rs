//! Runner settings
//!
//! Loaded from a JSON file by the headless runner. Missing fields fall back
//! to defaults; the result is validated before it is handed out.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICKS_PER_SECOND;
use crate::tuning::{Tuning, TuningError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("target_fps must be between 1 and 1000, got {0}")]
    FrameRate(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    /// Wall-clock pacing for `--realtime` runs
    pub target_fps: u32,
    /// Tick budget for a headless run
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            target_fps: TICKS_PER_SECOND,
            max_ticks: 60 * TICKS_PER_SECOND as u64,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=1000).contains(&self.target_fps) {
            return Err(SettingsError::FrameRate(self.target_fps));
        }
        if let Err(err) = self.tuning.validate() {
            log::warn!("Rejected tuning: {}", err);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
