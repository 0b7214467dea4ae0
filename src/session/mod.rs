//! Session controller: the one mutable owner of the UI's state.
//!
//! [`Session`] holds the working copy of the voice [`Settings`], the message
//! buffer and the engine [`Resolution`].  User actions become method calls
//! that may return a [`SpeechCommand`] for the speech worker; the worker's
//! [`SpeechResult`]s come back through [`Session::handle_result`].  Nothing
//! in here touches egui or spawns processes, so the whole flow is testable
//! with a stub launcher.

pub mod state;

pub use state::Resolution;

use std::path::PathBuf;

use crate::config::{AppConfig, EngineConfig};
use crate::speech::{format_arguments, SpeechCommand, SpeechResult};
use crate::voice::{Field, Settings, SettingsStore};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// The line shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct Session {
    settings: Settings,
    /// Text in the message box.
    pub message: String,
    /// Empty the message box once it has been handed to the engine.
    pub clear_after_speaking: bool,
    resolution: Resolution,
    engine: EngineConfig,
    store: SettingsStore,
    status: Option<Status>,
    /// Commands sent to the worker that have not been answered yet.
    pending: usize,
}

impl Session {
    /// Create a session, loading the voice settings from `store`.
    pub fn new(config: &AppConfig, store: SettingsStore) -> Self {
        let settings = store.load();
        log::info!("Voice settings: {}", format_arguments(settings));
        Self {
            settings,
            message: config.ui.initial_message.clone(),
            clear_after_speaking: config.ui.clear_after_speaking,
            resolution: Resolution::Unresolved,
            engine: config.engine.clone(),
            store,
            status: None,
            pending: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// `true` while the worker still owes us a result.
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// `true` while the chooser should be shown.
    pub fn needs_location(&self) -> bool {
        self.resolution == Resolution::NeedsManualLocation
    }

    /// The eSpeak flags for the current settings.
    pub fn arguments_preview(&self) -> String {
        format_arguments(self.settings)
    }

    // ── Settings actions ─────────────────────────────────────────────────

    /// Slider change.  The value is clamped to the field's range.
    pub fn set(&mut self, field: Field, value: u32) {
        self.settings = self.settings.with(field, value);
    }

    /// File → Save.  Failure is logged and shown in the status line; the
    /// working copy is left as it was either way.
    pub fn save(&mut self) {
        match self.store.save(&self.settings) {
            Ok(()) => self.info(format!("Saved to {}", self.store.path().display())),
            Err(e) => {
                log::error!("Could not save settings: {e}");
                self.error(format!("Could not save settings: {e}"));
            }
        }
    }

    /// File → Reset.  Restores the defaults without saving them.
    pub fn reset(&mut self) {
        self.settings = Settings::reset_to_defaults();
        self.info("Defaults restored (not saved)".into());
    }

    // ── Speech actions ───────────────────────────────────────────────────

    /// Startup probe of the configured program.  Only issued once, from
    /// `Unresolved`.
    pub fn start(&mut self) -> Option<SpeechCommand> {
        if self.resolution != Resolution::Unresolved {
            return None;
        }
        self.resolution = Resolution::Probing;
        self.pending += 1;
        log::info!("Probing speech engine '{}'", self.engine.program);
        Some(SpeechCommand::Probe {
            program: PathBuf::from(&self.engine.program),
            args: self.engine.probe_args.clone(),
        })
    }

    /// Speak the current message, if the engine is usable.
    ///
    /// Returns `None` (and spawns nothing) when the message is blank or no
    /// engine is resolved.  From `Abandoned` this re-opens the chooser.
    pub fn speak(&mut self) -> Option<SpeechCommand> {
        if self.message.trim().is_empty() {
            self.info("Nothing to say".into());
            return None;
        }

        let program = match &self.resolution {
            Resolution::Ready(path) => path.clone(),
            Resolution::Unresolved => {
                self.resolution = Resolution::Probing;
                PathBuf::from(&self.engine.program)
            }
            Resolution::Probing => {
                self.info("Still checking for the speech engine".into());
                return None;
            }
            Resolution::NeedsManualLocation => {
                self.info("Locate the speech engine first".into());
                return None;
            }
            Resolution::Abandoned => {
                self.resolution = Resolution::NeedsManualLocation;
                self.info("Locate the speech engine to speak".into());
                return None;
            }
        };

        let message = if self.clear_after_speaking {
            std::mem::take(&mut self.message)
        } else {
            self.message.clone()
        };
        log::info!("Message: {message:?}");

        self.pending += 1;
        Some(SpeechCommand::Speak {
            program,
            settings: self.settings,
            message,
        })
    }

    /// Fold a worker result into the session.
    pub fn handle_result(&mut self, result: SpeechResult) {
        self.pending = self.pending.saturating_sub(1);
        let probing = self.resolution == Resolution::Probing;

        match result {
            SpeechResult::Probed {
                program,
                found: true,
            } => {
                if probing {
                    self.info(format!("Using {}", program.display()));
                    self.resolution = Resolution::Ready(program);
                }
            }
            SpeechResult::Probed {
                program,
                found: false,
            } => {
                if probing {
                    self.error(format!("{} could not be started", program.display()));
                    self.resolution = Resolution::NeedsManualLocation;
                }
            }
            SpeechResult::Spoken { program } => {
                self.status = None;
                if probing {
                    self.resolution = Resolution::Ready(program);
                }
            }
            SpeechResult::Failed { program, error } => {
                self.error(error.to_string());
                let current = self.resolution.ready_path() == Some(program.as_path());
                if error.is_launch_failure() && (probing || current) {
                    self.resolution = Resolution::NeedsManualLocation;
                } else if probing {
                    // It started, so the path is good even though it failed.
                    self.resolution = Resolution::Ready(program);
                }
            }
        }
    }

    /// Answer from the chooser: `Some(path)` to use it, `None` to cancel.
    ///
    /// Choosing a path does not re-send the last message.
    pub fn choose_executable(&mut self, choice: Option<PathBuf>) {
        if !self.needs_location() {
            log::debug!("chooser answer ignored in state {:?}", self.resolution);
            return;
        }
        match choice {
            Some(path) => {
                log::info!("Speech engine set to {}", path.display());
                self.info(format!("Using {}", path.display()));
                self.resolution = Resolution::Ready(path);
            }
            None => {
                log::info!("Speech engine location cancelled");
                self.info("Speech engine not located; nothing was spoken".into());
                self.resolution = Resolution::Abandoned;
            }
        }
    }

    /// Take back a command that could not be handed to the worker.
    ///
    /// A dropped speak puts its message back in the box unless the user
    /// has already typed something new.
    pub fn command_dropped(&mut self, command: SpeechCommand, reason: &str) {
        self.pending = self.pending.saturating_sub(1);
        if self.resolution == Resolution::Probing {
            self.resolution = Resolution::Unresolved;
        }
        if let SpeechCommand::Speak { message, .. } = command {
            if self.message.is_empty() {
                self.message = message;
            }
        }
        self.error(format!("Speech worker unavailable: {reason}"));
    }

    // ── Helpers ──────────────────────────────────────────────────────────

    fn info(&mut self, text: String) {
        self.status = Some(Status {
            text,
            is_error: false,
        });
    }

    fn error(&mut self, text: String) {
        self.status = Some(Status {
            text,
            is_error: true,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
