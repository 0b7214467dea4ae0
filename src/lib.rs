//! MuteSpeak: slider front-end for the eSpeak speech synthesizer.
//!
//! * [`voice`]: the four voice parameters and their JSON file.
//! * [`speech`]: argument formatting, process launch, background worker.
//! * [`session`]: the controller that owns the mutable UI state.
//! * [`config`]: application preferences and platform paths.
//! * [`app`]: the eframe window.

pub mod app;
pub mod config;
pub mod session;
pub mod speech;
pub mod voice;
