//! Application preferences, read from TOML at startup.
//!
//! These are the knobs around the voice parameters (which program to run,
//! how the message box behaves).  The four voice parameters themselves live
//! in [`crate::voice`] and are stored as JSON.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// EngineConfig
// ---------------------------------------------------------------------------

/// How the external speech engine is located and probed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Program name assumed to be on the search path (e.g. `"espeak"`).
    pub program: String,
    /// Arguments for the preliminary invocation run once at startup.
    pub probe_args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "espeak".into(),
            probe_args: vec!["--version".into()],
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Window and message-box behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Empty the message box as soon as it has been sent to the engine.
    pub clear_after_speaking: bool,
    /// Text placed in the message box at startup.
    pub initial_message: String,
    /// Keep the window above all other windows.
    pub always_on_top: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clear_after_speaking: true,
            initial_message: "Hello".into(),
            always_on_top: false,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use mutespeak::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// assert!(!config.engine.program.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Speech engine lookup.
    pub engine: EngineConfig,
    /// UI behaviour.
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.engine.program, "espeak");
        assert_eq!(cfg.engine.probe_args, vec!["--version".to_string()]);
        assert!(cfg.ui.clear_after_speaking);
        assert_eq!(cfg.ui.initial_message, "Hello");
        assert!(!cfg.ui.always_on_top);
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn modified_values_are_read_back() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.engine.program = "espeak-ng".into();
        cfg.engine.probe_args = vec!["--help".into()];
        cfg.ui.clear_after_speaking = false;
        cfg.ui.initial_message = String::new();
        cfg.ui.always_on_top = true;

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, toml::to_string_pretty(&cfg).expect("encode")).unwrap();
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded, cfg);
    }

    /// Sections or keys left out of the file keep their defaults.
    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[engine]\nprogram = \"/opt/espeak/bin/espeak\"\n").unwrap();

        let cfg = AppConfig::load_from(&path).expect("load");

        assert_eq!(cfg.engine.program, "/opt/espeak/bin/espeak");
        assert_eq!(cfg.engine.probe_args, EngineConfig::default().probe_args);
        assert_eq!(cfg.ui, UiConfig::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
