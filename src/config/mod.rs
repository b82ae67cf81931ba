//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, record tags, domain grammar)
//! - Library configuration and logging option types
//! - CLI option parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Cli;
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
