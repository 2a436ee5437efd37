//! Persisted user settings.
//!
//! A flat JSON object remembering the folders the user last worked with.
//! Loading is total: a missing or malformed file means "no saved settings",
//! never an error and never a partially-initialized value.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = "docprobe";
const SETTINGS_FILE: &str = "settings.json";

/// Last-used locations, persisted between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Folder last chosen for saving results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_folder: Option<String>,

    /// Folder the last analyzed file was picked from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file_folder: Option<String>,

    /// Timestamp of the last save, RFC 3339. Written by [`Settings::save`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save: Option<String>,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// Returns `None` when the file is missing or not valid JSON for this
    /// shape.
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let content = std::fs::read_to_string(path.as_ref()).ok()?;
        match serde_json::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(
                    "ignoring malformed settings file {}: {}",
                    path.as_ref().display(),
                    e
                );
                None
            }
        }
    }

    /// Save settings to `path`, stamping `last_save` with the current time.
    ///
    /// Parent directories are created as needed.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.last_save = Some(chrono::Utc::now().to_rfc3339());

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// The default settings location under the platform config directory.
    ///
    /// `None` when no config directory is available on this platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }
}
