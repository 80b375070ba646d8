//! Services module
//!
//! This module contains business logic services.

pub mod relay;

pub use relay::BugReportRelay;
