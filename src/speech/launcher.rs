//! Running the external speech engine.
//!
//! [`Launcher`] is the seam between the speech worker and `std::process`.
//! [`ProcessLauncher`] is the production implementation; tests swap in a
//! stub that records what would have been spawned.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Everything that can go wrong when invoking the speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    /// The program does not exist (not on PATH, or the path is wrong).
    #[error("speech engine not found: {0}")]
    NotFound(String),

    /// The program exists but could not be started (permissions, not an
    /// executable, ...).
    #[error("could not start {program}: {reason}")]
    Launch { program: String, reason: String },

    /// The program ran and exited unsuccessfully.  `code` is `None` when it
    /// was killed by a signal.
    #[error("{program} exited with status {}", describe_code(.code))]
    Exited { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl SpeechError {
    /// `true` when the process never started, i.e. the executable needs to
    /// be located again.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, SpeechError::NotFound(_) | SpeechError::Launch { .. })
    }
}

// ---------------------------------------------------------------------------
// Launcher trait
// ---------------------------------------------------------------------------

/// Runs a program with an argument vector and waits for it to exit.
///
/// Arguments are passed straight to the OS; no shell is involved, so the
/// free-form message can never be interpreted as a command.
pub trait Launcher: Send + Sync {
    fn run(&self, program: &Path, args: &[String]) -> Result<(), SpeechError>;
}

// Compile-time assertion: Box<dyn Launcher> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Launcher>) {}
};

// ---------------------------------------------------------------------------
// ProcessLauncher
// ---------------------------------------------------------------------------

/// [`Launcher`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn run(&self, program: &Path, args: &[String]) -> Result<(), SpeechError> {
        let name = program.display().to_string();
        log::debug!("running {name} {args:?}");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SpeechError::NotFound(name.clone()),
                _ => SpeechError::Launch {
                    program: name.clone(),
                    reason: e.to_string(),
                },
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Exited {
                program: name,
                code: status.code(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let err = ProcessLauncher
            .run(Path::new("mutespeak-no-such-engine-8c1f"), &[])
            .expect_err("program does not exist");
        assert!(matches!(err, SpeechError::NotFound(_)));
        assert!(err.is_launch_failure());
    }

    #[test]
    fn exit_status_is_not_a_launch_failure() {
        let err = SpeechError::Exited {
            program: "espeak".into(),
            code: Some(1),
        };
        assert!(!err.is_launch_failure());
        assert_eq!(err.to_string(), "espeak exited with status 1");
    }

    #[test]
    fn signal_exit_displays_unknown() {
        let err = SpeechError::Exited {
            program: "espeak".into(),
            code: None,
        };
        assert_eq!(err.to_string(), "espeak exited with status unknown");
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_is_ok() {
        assert_eq!(ProcessLauncher.run(Path::new("true"), &[]), Ok(()));
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_reports_exit_code() {
        let err = ProcessLauncher
            .run(Path::new("false"), &[])
            .expect_err("false exits 1");
        assert_eq!(
            err,
            SpeechError::Exited {
                program: "false".into(),
                code: Some(1)
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn directory_cannot_be_launched() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = ProcessLauncher
            .run(dir.path(), &[])
            .expect_err("a directory is not executable");
        assert!(err.is_launch_failure());
    }
}
