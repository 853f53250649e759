//! Database, store, and cache functionality

pub mod cache;
pub mod db;
pub mod files;
pub mod migrations;
pub mod store;

// Re-exports for convenience
pub use cache::CachedStore;
pub use db::{create_pool, get_connection, DbConnection, DbPool};
pub use store::{InsertOutcome, SqliteStore, Store};
