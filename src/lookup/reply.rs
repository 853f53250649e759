//! Transport-neutral replies produced by the lookup handlers

/// Reply when a single key is absent
pub const FILE_NOT_FOUND: &str = "File not found.";

/// Reply when none of the keys in a range are stored
pub const NO_FILES_IN_RANGE: &str = "No files found in this range.";

/// Reply when a range starts after it ends
pub const INVALID_RANGE: &str = "Invalid range!";

/// One outbound action for the requesting chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Re-send a previously uploaded clip by its transport handle
    Audio(String),
    /// Plain text message
    Text(String),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn audio(handle: impl Into<String>) -> Self {
        Self::Audio(handle.into())
    }
}

/// Reply for a range wider than the configured limit
pub fn range_too_wide(max_width: u64) -> String {
    format!("Range too large! Maximum is {} files per request.", max_width)
}

/// Acknowledgement sent for every accepted upload
pub fn saved(key: &str) -> String {
    format!("Saved {}", key)
}
