//! Shared domain types

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extension every numeric key carries.
pub const KEY_EXTENSION: &str = ".mp3";

static NUMERIC_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([0-9]+)\.mp3$").expect("numeric file name regex"));

/// Canonical lookup key of a stored clip, e.g. `"42.mp3"`.
///
/// Numeric names are normalized to the integer without leading zeros, so
/// `"007.MP3"` and the query `"7"` meet at `"7.mp3"`. Any other name is kept
/// as its trimmed lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileKey(String);

impl FileKey {
    /// Key for a numeric identifier.
    pub fn from_number(number: u64) -> Self {
        Self(format!("{}{}", number, KEY_EXTENSION))
    }

    /// Key for an uploaded file's declared name.
    pub fn from_file_name(name: &str) -> Self {
        let name = name.trim();
        if let Some(caps) = NUMERIC_NAME_RE.captures(name) {
            if let Ok(number) = caps[1].parse::<u64>() {
                return Self::from_number(number);
            }
        }
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(FileKey::from_number(5).as_str(), "5.mp3");
        assert_eq!(FileKey::from_number(0).as_str(), "0.mp3");
    }

    #[test]
    fn test_numeric_file_name_is_normalized() {
        assert_eq!(FileKey::from_file_name("5.mp3"), FileKey::from_number(5));
        assert_eq!(FileKey::from_file_name("007.MP3"), FileKey::from_number(7));
        assert_eq!(FileKey::from_file_name("  12.Mp3 "), FileKey::from_number(12));
    }

    #[test]
    fn test_other_names_are_lowercased() {
        assert_eq!(FileKey::from_file_name("Intro Theme.MP3").as_str(), "intro theme.mp3");
        assert_eq!(FileKey::from_file_name("5.wav").as_str(), "5.wav");
    }

    #[test]
    fn test_oversized_number_keeps_literal_name() {
        let name = "99999999999999999999999.mp3";
        assert_eq!(FileKey::from_file_name(name).as_str(), name);
    }
}
