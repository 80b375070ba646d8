//! Start command handler

use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::Message;
use tracing::debug;

use crate::handlers::keyboard::main_keyboard;
use crate::texts;
use crate::utils::errors::Result;

/// Handle /start: introduce the bot and show the capability list.
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    debug!(chat_id = msg.chat.id.0, "Processing /start command");

    bot.send_message(msg.chat.id, texts::START_GREETING)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}
