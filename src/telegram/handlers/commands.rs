//! Command handler implementations (/start, /help)

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::HandlerError;
use crate::telegram::bot::{usage_text, Command};
use crate::telegram::Bot;

/// Handle a parsed bot command
pub(super) async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> Result<(), HandlerError> {
    match cmd {
        Command::Start | Command::Help => {
            bot.send_message(msg.chat.id, usage_text()).await?;
        }
    }
    Ok(())
}
