//! Query handling: classified text → store lookups → replies

use super::reply::{self, Reply};
use super::request::{classify, KeyRange, Request};
use crate::core::{AppResult, FileKey};
use crate::storage::Store;

/// Handles one inbound text message.
///
/// Issues one `Store::get` per requested key and never writes. Returns the
/// replies in the order they must be delivered; an empty vector means the
/// text was not a request and nothing is sent.
pub async fn handle_query(store: &dyn Store, text: &str, max_width: Option<u64>) -> AppResult<Vec<Reply>> {
    match classify(text, max_width) {
        Request::SingleKey(key) => lookup_single(store, &key).await,
        Request::KeyRange(range) => lookup_range(store, range).await,
        Request::InvalidRange { start, end } => {
            log::debug!("Rejecting reversed range {}-{}", start, end);
            Ok(vec![Reply::text(reply::INVALID_RANGE)])
        }
        Request::RangeTooWide { start, end, max_width } => {
            log::info!("Rejecting range {}-{} wider than {}", start, end, max_width);
            Ok(vec![Reply::text(reply::range_too_wide(max_width))])
        }
        Request::NoMatch => Ok(Vec::new()),
    }
}

async fn lookup_single(store: &dyn Store, key: &FileKey) -> AppResult<Vec<Reply>> {
    match store.get(key).await? {
        Some(handle) => Ok(vec![Reply::audio(handle)]),
        None => Ok(vec![Reply::text(reply::FILE_NOT_FOUND)]),
    }
}

async fn lookup_range(store: &dyn Store, range: KeyRange) -> AppResult<Vec<Reply>> {
    let mut replies = Vec::new();
    for key in range.keys() {
        if let Some(handle) = store.get(&key).await? {
            replies.push(Reply::audio(handle));
        }
    }

    log::debug!(
        "Range {}-{}: {} of {} keys found",
        range.start(),
        range.end(),
        replies.len(),
        range.width()
    );

    if replies.is_empty() {
        replies.push(Reply::text(reply::NO_FILES_IN_RANGE));
    }
    Ok(replies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InsertOutcome;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store recording every key it is asked for
    #[derive(Default)]
    struct MemoryStore {
        records: HashMap<FileKey, String>,
        lookups: Mutex<Vec<String>>,
    }

    impl MemoryStore {
        fn with(entries: &[(u64, &str)]) -> Self {
            Self {
                records: entries
                    .iter()
                    .map(|(id, handle)| (FileKey::from_number(*id), handle.to_string()))
                    .collect(),
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Store for MemoryStore {
        async fn insert_if_absent(&self, _key: &FileKey, _handle: &str) -> AppResult<InsertOutcome> {
            panic!("query handling must not write");
        }

        async fn get(&self, key: &FileKey) -> AppResult<Option<String>> {
            self.lookups.lock().unwrap().push(key.to_string());
            Ok(self.records.get(key).cloned())
        }
    }

    #[tokio::test]
    async fn test_single_found() {
        let store = MemoryStore::with(&[(5, "H1")]);
        let replies = handle_query(&store, "5", None).await.unwrap();
        assert_eq!(replies, vec![Reply::audio("H1")]);
    }

    #[tokio::test]
    async fn test_single_missing() {
        let store = MemoryStore::default();
        let replies = handle_query(&store, "5", None).await.unwrap();
        assert_eq!(replies, vec![Reply::text(reply::FILE_NOT_FOUND)]);
    }

    #[tokio::test]
    async fn test_range_skips_missing_keys_in_order() {
        let store = MemoryStore::with(&[(3, "H3"), (5, "H5")]);
        let replies = handle_query(&store, "3-5", None).await.unwrap();

        assert_eq!(replies, vec![Reply::audio("H3"), Reply::audio("H5")]);
        assert_eq!(store.lookups(), vec!["3.mp3", "4.mp3", "5.mp3"]);
    }

    #[tokio::test]
    async fn test_empty_range_yields_one_reply() {
        let store = MemoryStore::with(&[(50, "H50")]);
        let replies = handle_query(&store, "1-20", None).await.unwrap();
        assert_eq!(replies, vec![Reply::text(reply::NO_FILES_IN_RANGE)]);
        assert_eq!(store.lookups().len(), 20);
    }

    #[tokio::test]
    async fn test_invalid_range_does_not_touch_store() {
        let store = MemoryStore::with(&[(2, "H2")]);
        let replies = handle_query(&store, "9-2", None).await.unwrap();

        assert_eq!(replies, vec![Reply::text("Invalid range!")]);
        assert!(store.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_too_wide_range_does_not_touch_store() {
        let store = MemoryStore::default();
        let replies = handle_query(&store, "1-1000", Some(100)).await.unwrap();

        assert_eq!(replies, vec![Reply::text(reply::range_too_wide(100))]);
        assert!(store.lookups().is_empty());
    }

    #[tokio::test]
    async fn test_no_match_is_silent() {
        let store = MemoryStore::default();
        let replies = handle_query(&store, "hello there", None).await.unwrap();

        assert!(replies.is_empty());
        assert!(store.lookups().is_empty());
    }
}
