//! Application-level helpers for the CLI binary.
//!
//! This module provides:
//! - Rendering of a finished result as JSON
//! - Exit code policy evaluation

mod output;

pub use output::{evaluate_exit_code, render_result, EXIT_FATAL, EXIT_SPOOFABLE, EXIT_SUCCESS};
