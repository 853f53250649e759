//! The name → handle store seen by the lookup handlers.
//!
//! Handlers only see the `Store` trait; `SqliteStore` backs it with the
//! `files` table and `CachedStore` (see `storage::cache`) can sit in front.

use std::sync::Arc;

use async_trait::async_trait;

use super::db::{get_connection, DbPool};
use super::files::{get_file_id, insert_file_if_absent};
use crate::core::{AppResult, FileKey};

/// Outcome of `Store::insert_if_absent`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new record was written
    Inserted,
    /// The key was already taken; the stored handle is unchanged
    AlreadyPresent,
}

/// Persistent key → handle table.
///
/// `insert_if_absent` must be atomic: two concurrent calls for the same key
/// leave exactly one handle in effect.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_if_absent(&self, key: &FileKey, handle: &str) -> AppResult<InsertOutcome>;

    async fn get(&self, key: &FileKey) -> AppResult<Option<String>>;
}

/// SQLite-backed store
#[derive(Clone)]
pub struct SqliteStore {
    pool: Arc<DbPool>,
}

impl SqliteStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_if_absent(&self, key: &FileKey, handle: &str) -> AppResult<InsertOutcome> {
        let conn = get_connection(&self.pool)?;
        if insert_file_if_absent(&conn, key.as_str(), handle)? {
            Ok(InsertOutcome::Inserted)
        } else {
            Ok(InsertOutcome::AlreadyPresent)
        }
    }

    async fn get(&self, key: &FileKey) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        Ok(get_file_id(&conn, key.as_str())?)
    }
}
