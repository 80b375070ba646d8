//! Bug report relay service
//!
//! Forwards user bug reports to the administrator chat and confirms
//! delivery to the reporter. Best-effort: there is no retry and no delivery
//! acknowledgement beyond what the transport gives us.

use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, User};
use tracing::info;

use crate::config::BotConfig;
use crate::handlers::keyboard::main_keyboard;
use crate::texts;
use crate::utils::errors::Result;

/// Relays bug reports to one fixed administrator chat.
#[derive(Debug, Clone)]
pub struct BugReportRelay {
    bot: Bot,
    admin_chat: ChatId,
}

impl BugReportRelay {
    /// Create a new relay targeting the configured administrator.
    pub fn new(bot: Bot, config: &BotConfig) -> Self {
        Self {
            bot,
            admin_chat: ChatId(config.admin_id),
        }
    }

    /// Send `body` to the administrator on behalf of `reporter`, then
    /// thank the reporter in their own chat.
    pub async fn forward(&self, reporter: &User, reporter_chat: ChatId, body: &str) -> Result<()> {
        let name = display_name(reporter);
        self.bot
            .send_message(self.admin_chat, texts::bug_report(&name, body))
            .await?;
        self.bot
            .send_message(reporter_chat, texts::BUG_REPORT_THANKS)
            .reply_markup(main_keyboard())
            .await?;

        info!(user_id = reporter.id.0, "Bug report relayed to administrator");
        Ok(())
    }
}

/// Username when set, full name otherwise.
fn display_name(user: &User) -> String {
    user.username.clone().unwrap_or_else(|| user.full_name())
}
