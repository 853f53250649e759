//! Outbound delivery of lookup replies

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile};

use crate::core::AppResult;
use crate::lookup::Reply;

/// Sends messages and previously uploaded audio to a chat.
///
/// No retries happen here; a failed send fails the event being handled.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()>;

    async fn send_audio(&self, chat_id: ChatId, handle: &str) -> AppResult<()>;
}

#[async_trait]
impl Transport for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_audio(&self, chat_id: ChatId, handle: &str) -> AppResult<()> {
        Requester::send_audio(self, chat_id, InputFile::file_id(FileId(handle.to_string()))).await?;
        Ok(())
    }
}

/// Delivers `replies` to `chat_id` in order, stopping at the first failure.
pub async fn deliver(transport: &dyn Transport, chat_id: ChatId, replies: &[Reply]) -> AppResult<()> {
    for reply in replies {
        match reply {
            Reply::Audio(handle) => transport.send_audio(chat_id, handle).await?,
            Reply::Text(text) => transport.send_text(chat_id, text).await?,
        }
    }
    Ok(())
}
