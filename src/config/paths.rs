//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (application config + voice settings):
//!   Windows: %APPDATA%\mutespeak\
//!   macOS:   ~/Library/Application Support/mutespeak/
//!   Linux:   ~/.config/mutespeak/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `mutespeak.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml` (application preferences).
    pub settings_file: PathBuf,
    /// Full path to `mutespeak.json` (the four voice parameters).
    pub voice_file: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "mutespeak";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let voice_file = config_dir.join("mutespeak.json");

        Self {
            config_dir,
            settings_file,
            voice_file,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .voice_file
            .file_name()
            .is_some_and(|n| n == "mutespeak.json"));
    }

    #[test]
    fn files_live_in_config_dir() {
        let paths = AppPaths::new();
        assert_eq!(paths.settings_file.parent(), Some(paths.config_dir.as_path()));
        assert_eq!(paths.voice_file.parent(), Some(paths.config_dir.as_path()));
    }
}
