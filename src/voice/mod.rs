//! Voice parameters: the [`Settings`] tuple and its JSON [`SettingsStore`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mutespeak::voice::{Field, SettingsStore};
//!
//! let store = SettingsStore::new();
//! let settings = store.load().with(Field::Wpm, 220);
//! if let Err(e) = store.save(&settings) {
//!     eprintln!("not saved: {e}");
//! }
//! ```

pub mod settings;
pub mod store;

pub use settings::{Field, Settings};
pub use store::{SettingsStore, StoreError};
