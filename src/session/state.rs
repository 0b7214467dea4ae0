//! Readiness of the speech engine for the current session.

use std::path::{Path, PathBuf};

/// Where the session stands on finding a usable speech engine.
///
/// ```text
/// Unresolved ──startup probe / first speak──▶ Probing
/// Probing ──launched──▶ Ready(path)
///         ──not found─▶ NeedsManualLocation
/// NeedsManualLocation ──path chosen──▶ Ready(path)
///                     ──cancelled───▶ Abandoned
/// Ready(path) ──launch failure──▶ NeedsManualLocation
/// Abandoned ──next speak──▶ NeedsManualLocation
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Nothing tried yet.
    #[default]
    Unresolved,
    /// The first invocation of the configured program is in flight.
    Probing,
    /// Every speak reuses this path.
    Ready(PathBuf),
    /// Invocation failed; the chooser is waiting for the user.
    NeedsManualLocation,
    /// The user cancelled the chooser.
    Abandoned,
}

impl Resolution {
    /// The resolved engine path, if any.
    ///
    /// ```
    /// use std::path::Path;
    /// use mutespeak::session::Resolution;
    ///
    /// assert_eq!(Resolution::Ready("espeak".into()).ready_path(), Some(Path::new("espeak")));
    /// assert_eq!(Resolution::Probing.ready_path(), None);
    /// ```
    pub fn ready_path(&self) -> Option<&Path> {
        match self {
            Resolution::Ready(path) => Some(path),
            _ => None,
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::Unresolved => "Not checked",
            Resolution::Probing => "Checking engine",
            Resolution::Ready(_) => "Ready",
            Resolution::NeedsManualLocation => "Engine not found",
            Resolution::Abandoned => "No engine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unresolved() {
        assert_eq!(Resolution::default(), Resolution::Unresolved);
    }

    #[test]
    fn only_ready_has_a_path() {
        assert!(Resolution::Unresolved.ready_path().is_none());
        assert!(Resolution::NeedsManualLocation.ready_path().is_none());
        assert!(Resolution::Abandoned.ready_path().is_none());
        assert_eq!(
            Resolution::Ready("/usr/bin/espeak".into()).ready_path(),
            Some(Path::new("/usr/bin/espeak"))
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Resolution::Ready("x".into()).label(), "Ready");
        assert_eq!(Resolution::NeedsManualLocation.label(), "Engine not found");
    }
}
