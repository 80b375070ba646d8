//! Message handlers module
//!
//! Classifies incoming messages into routing events and executes the
//! actions the routing table produces.

use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, Message};
use tracing::debug;

use crate::handlers::commands::{help, start};
use crate::handlers::keyboard::main_keyboard;
use crate::handlers::media;
use crate::routing::{self, Action, InboundEvent};
use crate::services::BugReportRelay;
use crate::state::StateStore;
use crate::texts;
use crate::utils::errors::{Result, ScanBuddyError};

/// Handle any non-command message.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    state: StateStore,
    relay: BugReportRelay,
) -> Result<()> {
    let event = classify(&msg);
    dispatch(bot, msg, event, state, relay).await
}

/// Route `event` through the dispatch table, record the new conversation
/// state, and execute the resulting action.
pub async fn dispatch(
    bot: Bot,
    msg: Message,
    event: InboundEvent,
    state: StateStore,
    relay: BugReportRelay,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let prior = state.load(chat_id.0);
    let (action, next) = routing::route(&event, prior);

    debug!(chat_id = chat_id.0, prior = ?prior, next = ?next, action = ?action, "Routed message");
    state.store(chat_id.0, next);

    perform(bot, msg, action, relay).await
}

/// Map a Telegram message onto a transport-independent routing event.
fn classify(msg: &Message) -> InboundEvent {
    if msg.photo().is_some() {
        return InboundEvent::Photo;
    }
    if msg.document().is_some() {
        return InboundEvent::Document;
    }

    match msg.text() {
        Some(text) => InboundEvent::Text {
            body: text.to_string(),
            replies_to_report_prompt: replies_to_report_prompt(msg),
        },
        None => InboundEvent::Other,
    }
}

fn replies_to_report_prompt(msg: &Message) -> bool {
    msg.reply_to_message()
        .and_then(|reply| reply.text())
        .is_some_and(|text| text.contains(texts::BUG_REPORT_PROMPT))
}

/// Execute one routing action.
async fn perform(bot: Bot, msg: Message, action: Action, relay: BugReportRelay) -> Result<()> {
    match action {
        Action::ShowStart => start::handle_start(bot, msg).await,
        Action::ShowCommandList => help::handle_help(bot, msg).await,
        Action::ShowGreeting => send_with_keyboard(bot, msg.chat.id, texts::GREETING_REPLY).await,
        Action::ShowScanReady => send_with_keyboard(bot, msg.chat.id, texts::SCAN_READY).await,
        Action::PromptBugReport => {
            send_with_keyboard(bot, msg.chat.id, texts::BUG_REPORT_PROMPT).await
        }
        Action::RelayBugReport => {
            let reporter = msg.from.as_ref().ok_or_else(|| {
                ScanBuddyError::InvalidInput("No user in message".to_string())
            })?;
            relay
                .forward(reporter, msg.chat.id, msg.text().unwrap_or_default())
                .await
        }
        Action::DecodePhoto => media::handle_photo(bot, msg).await,
        Action::DecodeDocument => media::handle_document(bot, msg).await,
        Action::ShowHelpHint => send_with_keyboard(bot, msg.chat.id, texts::HELP_HINT).await,
    }
}

async fn send_with_keyboard(bot: Bot, chat_id: ChatId, text: &str) -> Result<()> {
    bot.send_message(chat_id, text)
        .reply_markup(main_keyboard())
        .await?;
    Ok(())
}
