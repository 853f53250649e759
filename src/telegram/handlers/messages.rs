//! Text message handler: single-id and range lookups

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::lookup::handle_query;
use crate::telegram::transport::deliver;
use crate::telegram::Bot;

/// Handler for plain text. Commands never reach the classifier.
pub(super) fn lookup_message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();

                let replies = match handle_query(deps.store.as_ref(), text, deps.max_range_width).await {
                    Ok(replies) => replies,
                    Err(e) => {
                        log::error!("Lookup failed for {:?} in chat {}: {}", text, msg.chat.id, e);
                        return Ok(());
                    }
                };

                if replies.is_empty() {
                    return Ok(());
                }

                log::debug!("Sending {} repl(ies) to chat {}", replies.len(), msg.chat.id);
                if let Err(e) = deliver(&bot, msg.chat.id, &replies).await {
                    log::error!("Failed to deliver lookup result to chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}
