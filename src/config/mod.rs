//! Configuration module for MuteSpeak.
//!
//! Provides `AppConfig` (application preferences), `AppPaths` for
//! cross-platform data directories, and TOML loading via `AppConfig::load`.
//! The file is hand-edited; the application never writes it.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, EngineConfig, UiConfig};
