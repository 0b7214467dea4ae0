//! Speech invoker: turns [`Settings`](crate::voice::Settings) into an eSpeak
//! command line and runs it.
//!
//! # Architecture
//!
//! ```text
//! Session ──SpeechCommand (mpsc)──▶ run_speaker()  ← tokio task
//!                                        │
//!                                        ├─ spawn_blocking(execute)
//!                                        │     └─ Launcher::run(program, args + message)
//!                                        ▼
//! Session ◀──SpeechResult (mpsc)──── result_tx
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mutespeak::speech::{build_arguments, Launcher, ProcessLauncher};
//! use mutespeak::voice::Settings;
//!
//! let mut args = build_arguments(Settings::default());
//! args.push("Hello".into());
//! ProcessLauncher.run(Path::new("espeak"), &args).unwrap();
//! ```

pub mod args;
pub mod launcher;
pub mod locate;
pub mod worker;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use args::{build_arguments, format_arguments};
pub use launcher::{Launcher, ProcessLauncher, SpeechError};
pub use locate::{candidate_paths, validate_choice, ChoiceError};
pub use worker::{execute, run_speaker, SpeechCommand, SpeechResult};
