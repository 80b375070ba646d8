//! Logging configuration and setup
//!
//! This module provides logging initialization for the ScanBuddy
//! application.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{Result, ScanBuddyError};

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).map_err(|e| {
        ScanBuddyError::Config(format!("Invalid log level '{}': {}", config.level, e))
    })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}
