//! ScanBuddy Telegram Bot
//!
//! A small Telegram bot that scans QR codes from user-submitted photos and
//! documents, greets users, and relays bug reports to the administrator.
//! This library provides the decode pipeline, the conversation routing
//! table, and the teloxide handler wiring.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod qr;
pub mod routing;
pub mod services;
pub mod state;
pub mod texts;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, ScanBuddyError};

// Re-export main components for easy access
pub use routing::{route, Action, ChatState, InboundEvent};
pub use services::BugReportRelay;
pub use state::StateStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
