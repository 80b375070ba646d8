//! Help command handler

use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::Message;

use crate::handlers::keyboard::main_keyboard;
use crate::texts;
use crate::utils::errors::Result;

/// Handle /help and the help button: show the capability list.
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, texts::COMMAND_LIST)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}
