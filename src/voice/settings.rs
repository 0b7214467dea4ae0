//! The four voice parameters and their bounds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One of the four voice parameters.
///
/// | Field       | Range   | Default | eSpeak flag |
/// |-------------|---------|---------|-------------|
/// | `Amplitude` | 0–200   | 100     | `-a`        |
/// | `Pitch`     | 0–99    | 50      | `-p`        |
/// | `Wpm`       | 80–450  | 175     | `-s`        |
/// | `Gap`       | 1–450   | 3       | `-g`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Amplitude,
    Pitch,
    Wpm,
    Gap,
}

impl Field {
    /// Every field, in slider order.
    pub const ALL: [Field; 4] = [Field::Amplitude, Field::Pitch, Field::Wpm, Field::Gap];

    /// JSON key used in `mutespeak.json`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Amplitude => "amplitude",
            Field::Pitch => "pitch",
            Field::Wpm => "wpm",
            Field::Gap => "gap",
        }
    }

    /// Slider caption.
    pub fn label(self) -> &'static str {
        match self {
            Field::Amplitude => "amplitude",
            Field::Pitch => "pitch",
            Field::Wpm => "words per minute",
            Field::Gap => "word gap",
        }
    }

    /// Accepted values, inclusive.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Field::Amplitude => 0..=200,
            Field::Pitch => 0..=99,
            Field::Wpm => 80..=450,
            Field::Gap => 1..=450,
        }
    }

    pub fn default_value(self) -> u32 {
        match self {
            Field::Amplitude => 100,
            Field::Pitch => 50,
            Field::Wpm => 175,
            Field::Gap => 3,
        }
    }

    /// Clamp `value` into [`Field::range`].
    pub fn clamp(self, value: u32) -> u32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }

    /// Interpret a persisted JSON value for this field.
    ///
    /// Returns `None` unless the value is a whole number inside the field's
    /// range, so the caller can substitute the default for this field alone.
    pub fn parse(self, value: &serde_json::Value) -> Option<u32> {
        let n = value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u64)
        })?;
        u32::try_from(n).ok().filter(|n| self.range().contains(n))
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// The four-parameter tuple controlling synthesized speech.
///
/// Plain `Copy` value: the session owns the mutable copy, formatting
/// functions take it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub amplitude: u32,
    pub pitch: u32,
    pub wpm: u32,
    pub gap: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            amplitude: Field::Amplitude.default_value(),
            pitch: Field::Pitch.default_value(),
            wpm: Field::Wpm.default_value(),
            gap: Field::Gap.default_value(),
        }
    }
}

impl Settings {
    /// The hard-coded defaults, regardless of anything loaded earlier.
    ///
    /// ```
    /// use mutespeak::voice::Settings;
    ///
    /// let s = Settings::reset_to_defaults();
    /// assert_eq!((s.amplitude, s.pitch, s.wpm, s.gap), (100, 50, 175, 3));
    /// ```
    pub fn reset_to_defaults() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Amplitude => self.amplitude,
            Field::Pitch => self.pitch,
            Field::Wpm => self.wpm,
            Field::Gap => self.gap,
        }
    }

    /// Returns a copy with `field` set to `value`, clamped to the field range.
    pub fn with(mut self, field: Field, value: u32) -> Self {
        let value = field.clamp(value);
        match field {
            Field::Amplitude => self.amplitude = value,
            Field::Pitch => self.pitch = value,
            Field::Wpm => self.wpm = value,
            Field::Gap => self.gap = value,
        }
        self
    }

    /// Returns a copy with every field clamped to its range.
    pub fn clamped(self) -> Self {
        Field::ALL
            .iter()
            .fold(self, |acc, &field| acc.with(field, acc.get(field)))
    }

    /// Build settings from a persisted JSON object, field by field.
    ///
    /// Missing or invalid entries take that field's default; extra keys are
    /// ignored.
    pub fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        Field::ALL.iter().fold(Self::default(), |acc, &field| {
            match map.get(field.key()).and_then(|v| field.parse(v)) {
                Some(value) => acc.with(field, value),
                None => {
                    log::debug!("voice setting '{}' missing or invalid; using default", field.key());
                    acc
                }
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn defaults_match_table() {
        let s = Settings::default();
        assert_eq!(s.amplitude, 100);
        assert_eq!(s.pitch, 50);
        assert_eq!(s.wpm, 175);
        assert_eq!(s.gap, 3);
    }

    #[test]
    fn reset_discards_previous_values() {
        let mut s = Settings::default().with(Field::Pitch, 10);
        s = s.with(Field::Wpm, 300);
        assert_ne!(s, Settings::default());

        assert_eq!(Settings::reset_to_defaults(), Settings::default());
    }

    #[test]
    fn with_clamps_to_range() {
        let s = Settings::default()
            .with(Field::Amplitude, 999)
            .with(Field::Wpm, 10)
            .with(Field::Gap, 0);
        assert_eq!(s.amplitude, 200);
        assert_eq!(s.wpm, 80);
        assert_eq!(s.gap, 1);
    }

    #[test]
    fn clamped_fixes_every_field() {
        let s = Settings {
            amplitude: 500,
            pitch: 120,
            wpm: 1000,
            gap: 0,
        }
        .clamped();
        assert_eq!(
            s,
            Settings {
                amplitude: 200,
                pitch: 99,
                wpm: 450,
                gap: 1
            }
        );
    }

    #[test]
    fn missing_key_defaults_that_field_only() {
        let s = Settings::from_json_map(&map(json!({
            "amplitude": 150,
            "pitch": 20,
            "gap": 10
        })));
        assert_eq!(s.amplitude, 150);
        assert_eq!(s.pitch, 20);
        assert_eq!(s.wpm, 175);
        assert_eq!(s.gap, 10);
    }

    #[test]
    fn invalid_values_default_per_field() {
        let s = Settings::from_json_map(&map(json!({
            "amplitude": "loud",
            "pitch": -4,
            "wpm": 300,
            "gap": null
        })));
        assert_eq!(s.amplitude, 100);
        assert_eq!(s.pitch, 50);
        assert_eq!(s.wpm, 300);
        assert_eq!(s.gap, 3);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let s = Settings::from_json_map(&map(json!({
            "amplitude": 201,
            "pitch": 100,
            "wpm": 79,
            "gap": 451
        })));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn whole_floats_are_accepted() {
        let s = Settings::from_json_map(&map(json!({ "pitch": 42.0, "wpm": 200.5 })));
        assert_eq!(s.pitch, 42);
        assert_eq!(s.wpm, 175);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let s = Settings::from_json_map(&map(json!({
            "pitch": 60,
            "voice": "en-us",
            "volume": 3
        })));
        assert_eq!(s, Settings::default().with(Field::Pitch, 60));
    }

    #[test]
    fn field_keys_are_distinct() {
        let keys: std::collections::HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), 4);
    }
}
