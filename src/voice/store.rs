//! JSON persistence for [`Settings`].
//!
//! The file is a flat object with exactly the keys `amplitude`, `pitch`,
//! `wpm` and `gap`.  It is read once at startup and written only when the
//! user asks to save.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Settings;
use crate::config::AppPaths;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Failure to persist the voice settings.  Never fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file (or its directory) could not be written.
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings could not be encoded as JSON.
    #[error("could not encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// SettingsStore
// ---------------------------------------------------------------------------

/// Reads and writes `mutespeak.json`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by the platform-appropriate `mutespeak.json`.
    pub fn new() -> Self {
        Self::at(AppPaths::new().voice_file)
    }

    /// Store backed by an explicit path (useful for tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, merging whatever is valid on disk over the defaults.
    ///
    /// Never fails: a missing file is the normal first run, and an
    /// unreadable or malformed file is logged and treated as empty.
    pub fn load(&self) -> Settings {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No voice settings at {}; using defaults", self.path.display());
                return Settings::default();
            }
            Err(e) => {
                log::warn!("Could not read {} ({e}); using defaults", self.path.display());
                return Settings::default();
            }
        };

        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Object(map)) => Settings::from_json_map(&map),
            Ok(_) => {
                log::warn!("{} is not a JSON object; using defaults", self.path.display());
                Settings::default()
            }
            Err(e) => {
                log::warn!("{} is not valid JSON ({e}); using defaults", self.path.display());
                Settings::default()
            }
        }
    }

    /// Overwrite the file with all four fields, creating parent directories
    /// as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, content).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Saved voice settings to {}", self.path.display());
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
