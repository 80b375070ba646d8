//! Command handlers module
//!
//! This module contains handlers for the bot commands /start and /help.

pub mod help;
pub mod start;

use teloxide::types::Message;
use teloxide::utils::command::BotCommands;
use teloxide::Bot;

use crate::routing::InboundEvent;
use crate::services::BugReportRelay;
use crate::state::StateStore;
use crate::utils::errors::Result;

/// All available bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Команды ScanBuddy:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "получить справку о возможностях бота")]
    Help,
}

/// Main command dispatcher. Commands go through the same routing table as
/// plain messages so priority and state handling live in one place.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: StateStore,
    relay: BugReportRelay,
) -> Result<()> {
    let event = match cmd {
        Command::Start => InboundEvent::StartCommand,
        Command::Help => InboundEvent::HelpCommand,
    };

    crate::handlers::messages::dispatch(bot, msg, event, state, relay).await
}
