//! eSpeak command-line formatting.
//!
//! The flag order is fixed: `-z -p <pitch> -s <wpm> -a <amplitude> -g <gap>`.
//! Values are formatted as-is; range checks happen where the values are set.

use crate::voice::Settings;

/// The eSpeak flags for `settings`, one element per argument.
///
/// The message is *not* included; callers append it as its own argument.
pub fn build_arguments(settings: Settings) -> Vec<String> {
    vec![
        "-z".into(),
        "-p".into(),
        settings.pitch.to_string(),
        "-s".into(),
        settings.wpm.to_string(),
        "-a".into(),
        settings.amplitude.to_string(),
        "-g".into(),
        settings.gap.to_string(),
    ]
}

/// The same flags joined with single spaces, for display and logging.
///
/// ```
/// use mutespeak::speech::format_arguments;
/// use mutespeak::voice::Settings;
///
/// assert_eq!(format_arguments(Settings::default()), "-z -p 50 -s 175 -a 100 -g 3");
/// ```
pub fn format_arguments(settings: Settings) -> String {
    build_arguments(settings).join(" ")
}
