//! Speech worker: runs engine invocations off the UI thread.
//!
//! The UI sends [`SpeechCommand`]s and polls [`SpeechResult`]s with
//! `try_recv`, so a long utterance never freezes the window.  Each command
//! runs to completion on tokio's blocking pool before the next is taken,
//! which keeps utterances from overlapping.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::{build_arguments, Launcher, SpeechError};
use crate::voice::Settings;

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

/// Work for the speech worker.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCommand {
    /// Preliminary invocation to check that `program` can be started.
    Probe { program: PathBuf, args: Vec<String> },
    /// Speak `message` with `settings`.
    Speak {
        program: PathBuf,
        settings: Settings,
        message: String,
    },
}

/// Outcome of one [`SpeechCommand`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechResult {
    /// The probe finished; `found` is `true` when the program ran cleanly.
    Probed { program: PathBuf, found: bool },
    /// The message was spoken.
    Spoken { program: PathBuf },
    /// The speak command failed.
    Failed { program: PathBuf, error: SpeechError },
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Run one command synchronously.  The message is appended as the final,
/// separate argument after the eSpeak flags.
pub fn execute(launcher: &dyn Launcher, command: SpeechCommand) -> SpeechResult {
    match command {
        SpeechCommand::Probe { program, args } => {
            let found = match launcher.run(&program, &args) {
                Ok(()) => true,
                Err(e) => {
                    log::info!("probe of {} failed: {e}", program.display());
                    false
                }
            };
            SpeechResult::Probed { program, found }
        }
        SpeechCommand::Speak {
            program,
            settings,
            message,
        } => {
            let mut args = build_arguments(settings);
            args.push(message);
            match launcher.run(&program, &args) {
                Ok(()) => SpeechResult::Spoken { program },
                Err(error) => {
                    log::warn!("speech failed: {error}");
                    SpeechResult::Failed { program, error }
                }
            }
        }
    }
}

/// Worker loop; runs until every command sender has been dropped.
pub async fn run_speaker(
    launcher: Arc<dyn Launcher>,
    mut command_rx: mpsc::Receiver<SpeechCommand>,
    result_tx: mpsc::Sender<SpeechResult>,
) {
    while let Some(command) = command_rx.recv().await {
        let program = match &command {
            SpeechCommand::Probe { program, .. } | SpeechCommand::Speak { program, .. } => {
                program.clone()
            }
        };

        let launcher_clone = Arc::clone(&launcher);
        let result =
            match tokio::task::spawn_blocking(move || execute(launcher_clone.as_ref(), command))
                .await
            {
                Ok(result) => result,
                Err(e) => SpeechResult::Failed {
                    program: program.clone(),
                    error: SpeechError::Launch {
                        program: program.display().to_string(),
                        reason: format!("internal error: {e}"),
                    },
                },
            };

        if result_tx.send(result).await.is_err() {
            log::debug!("result receiver dropped; speech worker stopping");
            break;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
