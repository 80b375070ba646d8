//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from an optional TOML file and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{BotConfig, LoggingConfig, Settings};
