//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A configuration summary printed once at startup

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at application startup
pub fn log_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("DATABASE_PATH: {}", config::DATABASE_PATH.as_str());
    log::info!("LOG_FILE_PATH: {}", config::LOG_FILE_PATH.as_str());

    match *config::MAX_RANGE_WIDTH {
        Some(width) => log::info!("MAX_RANGE_WIDTH: {}", width),
        None => log::warn!("MAX_RANGE_WIDTH: unlimited (one message may trigger any number of sends)"),
    }

    match *config::CACHE_CAPACITY {
        0 => log::info!("CACHE_CAPACITY: cache disabled"),
        capacity => log::info!("CACHE_CAPACITY: {}", capacity),
    }

    if let Some(ref url) = *config::BOT_API_URL {
        log::info!("BOT_API_URL: {}", url);
    }

    if config::BOT_TOKEN.is_empty() {
        log::error!("BOT_TOKEN: not set");
    } else {
        log::info!("BOT_TOKEN: set");
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
