//! Error handling for ScanBuddy
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for ScanBuddy application
#[derive(Error, Debug)]
pub enum ScanBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("File download error: {0}")]
    Download(#[from] teloxide::DownloadError),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for ScanBuddy operations
pub type Result<T> = std::result::Result<T, ScanBuddyError>;
