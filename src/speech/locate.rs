//! Finding the speech engine on disk when the configured program name does
//! not resolve.
//!
//! The chooser window pre-fills its list from [`candidate_paths`]; the path
//! the user confirms goes through [`validate_choice`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a path from the chooser was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Enter the path of the speech engine")]
    Empty,

    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),
}

/// Executable names tried in every search directory.
#[cfg(windows)]
const ENGINE_NAMES: &[&str] = &["espeak.exe", "espeak-ng.exe"];
#[cfg(not(windows))]
const ENGINE_NAMES: &[&str] = &["espeak", "espeak-ng"];

/// Install locations outside `PATH` that eSpeak packages commonly use.
#[cfg(windows)]
const WELL_KNOWN_DIRS: &[&str] = &[
    r"C:\Program Files\eSpeak\command_line",
    r"C:\Program Files (x86)\eSpeak\command_line",
    r"C:\Program Files\eSpeak NG",
    r"C:\Program Files (x86)\eSpeak NG",
];
#[cfg(not(windows))]
const WELL_KNOWN_DIRS: &[&str] = &[
    "/usr/bin",
    "/usr/local/bin",
    "/opt/homebrew/bin",
    "/opt/local/bin",
    "/snap/bin",
];

/// Existing engine executables in `PATH` and the well-known install
/// directories, without duplicates, in search order.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|p| std::env::split_paths(&p).collect())
        .unwrap_or_default();
    dirs.extend(WELL_KNOWN_DIRS.iter().map(PathBuf::from));
    candidates_in(dirs, ENGINE_NAMES)
}

/// Every `dir/name` that is an existing file, deduplicated.
pub fn candidates_in<I>(dirs: I, names: &[&str]) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut found: Vec<PathBuf> = Vec::new();
    for dir in dirs {
        for name in names {
            let path = dir.join(name);
            if path.is_file() && !found.contains(&path) {
                found.push(path);
            }
        }
    }
    found
}

/// Check a path typed or picked in the chooser.
///
/// A bare program name (no directory part) is accepted as-is and left to
/// `PATH` lookup; anything with a directory part must name an existing file.
pub fn validate_choice(input: &str) -> Result<PathBuf, ChoiceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChoiceError::Empty);
    }

    let path = Path::new(trimmed);
    let is_bare_name = path.components().count() == 1 && path.parent() == Some(Path::new(""));
    if is_bare_name || path.is_file() {
        Ok(path.to_path_buf())
    } else if path.is_dir() {
        Err(ChoiceError::IsDirectory(path.to_path_buf()))
    } else {
        Err(ChoiceError::Missing(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_only_existing_files() {
        let a = tempdir().expect("temp dir");
        let b = tempdir().expect("temp dir");
        std::fs::write(a.path().join("espeak"), b"").unwrap();
        std::fs::create_dir(b.path().join("espeak")).unwrap();
        std::fs::write(b.path().join("espeak-ng"), b"").unwrap();

        let found = candidates_in(
            vec![a.path().to_path_buf(), b.path().to_path_buf()],
            &["espeak", "espeak-ng"],
        );

        assert_eq!(
            found,
            vec![a.path().join("espeak"), b.path().join("espeak-ng")]
        );
    }

    #[test]
    fn duplicate_dirs_are_listed_once() {
        let a = tempdir().expect("temp dir");
        std::fs::write(a.path().join("espeak"), b"").unwrap();

        let found = candidates_in(
            vec![a.path().to_path_buf(), a.path().to_path_buf()],
            &["espeak"],
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn bare_name_is_accepted() {
        assert_eq!(validate_choice(" espeak-ng "), Ok(PathBuf::from("espeak-ng")));
    }

    #[test]
    fn empty_choice_is_rejected() {
        assert_eq!(validate_choice("   "), Err(ChoiceError::Empty));
    }

    #[test]
    fn existing_file_is_accepted_and_directory_rejected() {
        let dir = tempdir().expect("temp dir");
        let exe = dir.path().join("espeak");
        std::fs::write(&exe, b"").unwrap();

        assert_eq!(validate_choice(exe.to_str().unwrap()), Ok(exe.clone()));

        let err = validate_choice(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err, ChoiceError::IsDirectory(dir.path().to_path_buf()));
        assert!(err.to_string().ends_with("is a directory"));
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("nope").join("espeak");
        let err = validate_choice(missing.to_str().unwrap()).unwrap_err();
        assert_eq!(err, ChoiceError::Missing(missing.clone()));
        assert!(err.to_string().ends_with("does not exist"));
    }
}
