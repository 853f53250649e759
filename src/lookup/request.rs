//! Classification of inbound text into lookup requests
//!
//! Exactly two shapes are recognized, in this order:
//! - a single id: `42` or `42.mp3` (extension case-insensitive)
//! - a range: `3-5`, with optional whitespace around the hyphen
//!
//! Everything else is `NoMatch` and gets no reply.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::FileKey;

static SINGLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([0-9]+)(?:\.mp3)?$").expect("single id regex"));

static RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\s*-\s*([0-9]+)$").expect("range regex"));

/// Classified inbound text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// One id, already canonical
    SingleKey(FileKey),
    /// Inclusive, ascending id interval
    KeyRange(KeyRange),
    /// `start > end`
    InvalidRange { start: u64, end: u64 },
    /// Interval wider than the configured limit
    RangeTooWide { start: u64, end: u64, max_width: u64 },
    /// Not a lookup request
    NoMatch,
}

/// Inclusive interval of numeric ids, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    start: u64,
    end: u64,
}

impl KeyRange {
    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of keys covered, saturating at `u64::MAX`.
    pub fn width(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// Keys in ascending numeric order, generated lazily.
    pub fn keys(&self) -> impl Iterator<Item = FileKey> {
        self.ids().map(FileKey::from_number)
    }

    fn ids(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// Classifies `text` (trimmed here) into a `Request`.
///
/// `max_width` bounds range requests; `None` means unlimited. Ids that do
/// not fit in a `u64` are treated as `NoMatch`.
pub fn classify(text: &str, max_width: Option<u64>) -> Request {
    let text = text.trim();

    if let Some(caps) = SINGLE_RE.captures(text) {
        return match caps[1].parse::<u64>() {
            Ok(id) => Request::SingleKey(FileKey::from_number(id)),
            Err(_) => Request::NoMatch,
        };
    }

    if let Some(caps) = RANGE_RE.captures(text) {
        let (Ok(start), Ok(end)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>()) else {
            return Request::NoMatch;
        };
        if start > end {
            return Request::InvalidRange { start, end };
        }
        let range = KeyRange { start, end };
        if let Some(max_width) = max_width {
            if range.width() > max_width {
                return Request::RangeTooWide { start, end, max_width };
            }
        }
        return Request::KeyRange(range);
    }

    Request::NoMatch
}
