//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use super::commands::handle_command;
use super::messages::lookup_message_handler;
use super::types::{HandlerDeps, HandlerError};
use super::uploads::audio_upload_handler;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and can be used in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (store, range limit)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_uploads = deps.clone();
    let deps_messages = deps;

    dptree::entry()
        .branch(command_handler())
        .branch(audio_upload_handler(deps_uploads))
        .branch(lookup_message_handler(deps_messages))
}

/// Handler for /start and /help
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command)
}
