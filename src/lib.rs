//! Clipdex - Telegram bot that files MP3 clips under numeric names
//!
//! Uploaders send audio named like `5.mp3`; the bot remembers the Telegram
//! file handle under the canonical key. Anyone can then send `5`, `5.mp3`
//! or a range like `3-5` and get the stored clips back.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, shared types
//! - `lookup`: request classification, query and ingestion handling
//! - `storage`: SQLite pool, migrations, the `Store` trait and its cache
//! - `telegram`: bot creation, dispatcher schema, reply delivery

pub mod cli;
pub mod core;
pub mod lookup;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult, FileKey};
pub use lookup::{classify, handle_attachment, handle_query, Attachment, Reply, Request};
pub use storage::{create_pool, get_connection, CachedStore, DbConnection, DbPool, SqliteStore, Store};
