//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::{Audio, Document, Message};

use crate::lookup::Attachment;
use crate::storage::Store;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn Store>,
    /// Widest range a single request may cover, `None` for unlimited
    pub max_range_width: Option<u64>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(store: Arc<dyn Store>, max_range_width: Option<u64>) -> Self {
        Self { store, max_range_width }
    }
}

/// Extracts the attachment carried by an audio or document message.
///
/// Audio wins when both are present; any other message yields `None`.
pub fn attachment_from_message(msg: &Message) -> Option<Attachment> {
    msg.audio()
        .map(attachment_from_audio)
        .or_else(|| msg.document().map(attachment_from_document))
}

fn attachment_from_audio(audio: &Audio) -> Attachment {
    Attachment {
        file_name: audio.file_name.clone(),
        mime_type: audio.mime_type.as_ref().map(|m| m.to_string()),
        handle: audio.file.id.0.clone(),
    }
}

fn attachment_from_document(doc: &Document) -> Attachment {
    Attachment {
        file_name: doc.file_name.clone(),
        mime_type: doc.mime_type.as_ref().map(|m| m.to_string()),
        handle: doc.file.id.0.clone(),
    }
}
