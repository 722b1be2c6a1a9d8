//! Window and font settings, persisted as JSON

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tallycore::storage::{self, StorageError};

/// Persisted settings. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Inner window width in points
    pub window_width: f32,
    /// Inner window height in points
    pub window_height: f32,
    /// Center the window on screen at startup
    pub centered: bool,
    /// Keypad label size
    pub button_font_size: f32,
    /// Expression display text size
    pub display_font_size: f32,
    /// Keypad button height
    pub button_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 510.0,
            window_height: 525.0,
            centered: true,
            button_font_size: 18.0,
            display_font_size: 28.0,
            button_height: 64.0,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        tallycore::storage::config_dir("tally").join("settings.json")
    }

    /// Load from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. Read only: a missing or unreadable file yields
    /// defaults and nothing is written.
    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<Settings>(path) {
            Ok(settings) => settings,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
                Self::default()
            }
        }
    }
}
