//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clipdex::core::AppResult;
use clipdex::lookup::Attachment;
use clipdex::storage::{create_pool, SqliteStore};
use clipdex::telegram::Transport;
use tempfile::TempDir;
use teloxide::types::ChatId;

/// Chat id used by every test
pub fn create_test_chat_id() -> ChatId {
    ChatId(123456789)
}

/// One call observed by `RecordingTransport`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(ChatId, String),
    Audio(ChatId, String),
}

/// Transport that records calls instead of talking to Telegram
#[derive(Default, Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<Sent>>>,
}

impl RecordingTransport {
    pub fn calls(&self) -> Vec<Sent> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.calls.lock().unwrap().push(Sent::Text(chat_id, text.to_string()));
        Ok(())
    }

    async fn send_audio(&self, chat_id: ChatId, handle: &str) -> AppResult<()> {
        self.calls.lock().unwrap().push(Sent::Audio(chat_id, handle.to_string()));
        Ok(())
    }
}

/// A SQLite store in a fresh temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("clipdex.sqlite");
    let pool = create_pool(path.to_str().unwrap()).expect("failed to create pool");
    (dir, SqliteStore::new(Arc::new(pool)))
}

/// An MPEG audio attachment
pub fn mp3(name: &str, handle: &str) -> Attachment {
    Attachment {
        file_name: Some(name.to_string()),
        mime_type: Some("audio/mpeg".to_string()),
        handle: handle.to_string(),
    }
}
