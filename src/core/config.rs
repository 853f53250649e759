//! Configuration read once from the environment.
//!
//! `main` loads `.env` before the first access, so values from the file
//! are visible here.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (local telegram-bot-api), if any
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Database file path
/// Read from DATABASE_PATH environment variable
/// Default: clipdex.sqlite
pub static DATABASE_PATH: Lazy<String> =
    Lazy::new(|| env::var("DATABASE_PATH").unwrap_or_else(|_| "clipdex.sqlite".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: clipdex.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "clipdex.log".to_string()));

/// Maximum number of keys a single range request may cover.
/// `None` means unlimited (MAX_RANGE_WIDTH=0).
pub static MAX_RANGE_WIDTH: Lazy<Option<u64>> =
    Lazy::new(|| parse_range_width(env::var("MAX_RANGE_WIDTH").ok().as_deref()));

/// Number of handles kept by the read-through cache. 0 disables the cache.
pub static CACHE_CAPACITY: Lazy<u64> =
    Lazy::new(|| parse_cache_capacity(env::var("CACHE_CAPACITY").ok().as_deref()));

/// Range limits
pub mod range {
    /// Default maximum range width when MAX_RANGE_WIDTH is unset or unparsable
    pub const DEFAULT_MAX_WIDTH: u64 = 100;
}

/// Cache configuration
pub mod cache {
    /// Default read-through cache capacity
    pub const DEFAULT_CAPACITY: u64 = 1000;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Parses MAX_RANGE_WIDTH. `0` disables the limit.
pub fn parse_range_width(raw: Option<&str>) -> Option<u64> {
    let Some(raw) = raw else {
        return Some(range::DEFAULT_MAX_WIDTH);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(width) => Some(width),
        Err(_) => {
            log::warn!(
                "Invalid MAX_RANGE_WIDTH value {:?}, using default {}",
                raw,
                range::DEFAULT_MAX_WIDTH
            );
            Some(range::DEFAULT_MAX_WIDTH)
        }
    }
}

/// Parses CACHE_CAPACITY, falling back to the default on garbage.
pub fn parse_cache_capacity(raw: Option<&str>) -> u64 {
    match raw.map(|r| r.trim().parse::<u64>()) {
        None => cache::DEFAULT_CAPACITY,
        Some(Ok(capacity)) => capacity,
        Some(Err(_)) => {
            log::warn!(
                "Invalid CACHE_CAPACITY value {:?}, using default {}",
                raw,
                cache::DEFAULT_CAPACITY
            );
            cache::DEFAULT_CAPACITY
        }
    }
}
