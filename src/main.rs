//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_spoofcheck` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the result and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process;

use domain_spoofcheck::app::{evaluate_exit_code, render_result, EXIT_FATAL, EXIT_SUCCESS};
use domain_spoofcheck::config::Cli;
use domain_spoofcheck::initialization::init_logger_with;
use domain_spoofcheck::{run_check, CheckError, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(&config).await {
        Ok(result) => {
            let rendered =
                render_result(&result, config.compact).context("Failed to serialize result")?;
            println!("{rendered}");

            let code = evaluate_exit_code(&config.fail_on, &result);
            if code != EXIT_SUCCESS {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            if let CheckError::Lookup { partial, .. } = &e {
                debug!("Partial result before the failed lookup: {partial:?}");
            }
            eprintln!("domain_spoofcheck error: {:#}", anyhow::Error::new(e));
            process::exit(EXIT_FATAL);
        }
    }
}
