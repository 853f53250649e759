//! Audio upload handler

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{attachment_from_message, HandlerDeps, HandlerError};
use crate::lookup::handle_attachment;
use crate::telegram::transport::deliver;
use crate::telegram::Bot;

/// Handler for audio and document uploads
pub(super) fn audio_upload_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.audio().is_some() || msg.document().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let Some(attachment) = attachment_from_message(&msg) else {
                    return Ok(());
                };

                let replies = match handle_attachment(deps.store.as_ref(), &attachment).await {
                    Ok(replies) => replies,
                    Err(e) => {
                        log::error!("Failed to register upload in chat {}: {}", msg.chat.id, e);
                        return Ok(());
                    }
                };

                if let Err(e) = deliver(&bot, msg.chat.id, &replies).await {
                    log::error!("Failed to acknowledge upload in chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}
