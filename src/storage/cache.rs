//! Read-through cache in front of a `Store`
//!
//! Only positive lookups are cached. Records are never updated, so a cached
//! handle cannot go stale; inserts still invalidate their key so a miss
//! recorded before the insert never shadows the new row.

use async_trait::async_trait;
use moka::future::Cache;

use super::store::{InsertOutcome, Store};
use crate::core::{AppResult, FileKey};

/// Store wrapper with a bounded in-memory cache of handles
pub struct CachedStore<S> {
    inner: S,
    handles: Cache<FileKey, String>,
}

impl<S: Store> CachedStore<S> {
    /// Wraps `inner` with a cache holding at most `capacity` handles.
    pub fn new(inner: S, capacity: u64) -> Self {
        Self {
            inner,
            handles: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: Store> Store for CachedStore<S> {
    async fn insert_if_absent(&self, key: &FileKey, handle: &str) -> AppResult<InsertOutcome> {
        let outcome = self.inner.insert_if_absent(key, handle).await?;
        self.handles.invalidate(key).await;
        Ok(outcome)
    }

    async fn get(&self, key: &FileKey) -> AppResult<Option<String>> {
        if let Some(handle) = self.handles.get(key).await {
            log::debug!("CachedStore: hit {}", key);
            return Ok(Some(handle));
        }

        let handle = self.inner.get(key).await?;
        if let Some(ref handle) = handle {
            self.handles.insert(key.clone(), handle.clone()).await;
        }
        Ok(handle)
    }
}
