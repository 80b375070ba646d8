//! ScanBuddy Telegram Bot
//!
//! Main application entry point

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{error, info, warn};

use ScanBuddy::{
    config::Settings,
    handlers::{commands::Command, handle_command, handle_message},
    services::BugReportRelay,
    state::StateStore,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting {} v{}...", ScanBuddy::NAME, ScanBuddy::VERSION);

    let bot = Bot::new(&settings.bot.token);
    let state = StateStore::new();
    let relay = BugReportRelay::new(bot.clone(), &settings.bot);

    let handler = create_handler();

    info!("ScanBuddy bot is ready, starting polling...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, relay])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("ScanBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands),
            )
            .branch(
                // Handle regular messages (text, photos, documents)
                dptree::endpoint(handle_messages),
            ),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: StateStore,
    relay: BugReportRelay,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, state, relay).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    state: StateStore,
    relay: BugReportRelay,
) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, state, relay).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
