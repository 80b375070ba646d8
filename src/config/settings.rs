//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from an optional TOML file and environment
//! variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Bot API token.
    pub token: String,
    /// Chat id that receives relayed bug reports.
    pub admin_id: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Load settings from the optional `config.toml` and environment
    /// variables: `SCANBUDDY_BOT__TOKEN`, `SCANBUDDY_BOT__ADMIN_ID`,
    /// `SCANBUDDY_LOGGING__LEVEL`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("bot.token", "")?
            .set_default("bot.admin_id", 0_i64)?
            .set_default("logging.level", "info")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SCANBUDDY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ScanBuddyError> {
        super::validation::validate_settings(self)
    }
}
