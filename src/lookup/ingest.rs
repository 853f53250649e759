//! Registration of uploaded clips

use super::reply::{self, Reply};
use crate::core::{AppResult, FileKey};
use crate::storage::{InsertOutcome, Store};

/// The only accepted content type (MPEG audio)
pub const ACCEPTED_MIME_TYPE: &str = "audio/mpeg";

/// An inbound attachment as declared by the sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Declared file name, e.g. "5.mp3"
    pub file_name: Option<String>,
    /// Declared MIME type
    pub mime_type: Option<String>,
    /// Transport-issued handle used to re-send the file
    pub handle: String,
}

impl Attachment {
    /// True if the declared type is MPEG audio. Parameters such as
    /// `; charset=...` and letter case are ignored.
    pub fn is_supported(&self) -> bool {
        self.mime_type
            .as_deref()
            .and_then(|m| m.split(';').next())
            .map(|essence| essence.trim().eq_ignore_ascii_case(ACCEPTED_MIME_TYPE))
            .unwrap_or(false)
    }
}

/// Handles one inbound attachment.
///
/// Unsupported types and nameless files are dropped without a reply. Every
/// accepted file gets exactly one "Saved <key>" acknowledgement, whether or
/// not the key was already taken.
pub async fn handle_attachment(store: &dyn Store, attachment: &Attachment) -> AppResult<Vec<Reply>> {
    if !attachment.is_supported() {
        log::debug!("Ignoring attachment with type {:?}", attachment.mime_type);
        return Ok(Vec::new());
    }

    let Some(name) = attachment.file_name.as_deref().filter(|n| !n.trim().is_empty()) else {
        log::warn!("Ignoring audio attachment without a file name");
        return Ok(Vec::new());
    };

    let key = FileKey::from_file_name(name);
    match store.insert_if_absent(&key, &attachment.handle).await? {
        InsertOutcome::Inserted => log::info!("Registered {} (declared name {:?})", key, name),
        InsertOutcome::AlreadyPresent => log::info!("{} already registered, keeping existing handle", key),
    }

    Ok(vec![Reply::text(reply::saved(key.as_str()))])
}
