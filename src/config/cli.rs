//! Command-line options.

use clap::Parser;

use crate::config::constants::DNS_TIMEOUT_SECS;
use crate::config::types::{Config, FailOn, LogFormat, LogLevel};

/// Command-line options for `domain_spoofcheck`.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// domain_spoofcheck example.com
///
/// # Trace every pipeline step
/// domain_spoofcheck example.com --verbose
///
/// # Ask a specific resolver, fail the shell pipeline when spoofable
/// domain_spoofcheck example.com --nameserver 1.1.1.1 --fail-on spoofable
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_spoofcheck",
    version,
    about = "Checks whether an email domain can be spoofed based on its SPF and DMARC records."
)]
pub struct Cli {
    /// Domain to check (e.g. example.com)
    pub domain: String,

    /// Emit step-by-step tracing messages (same as --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Nameserver to query (IP or IP:PORT) instead of the system resolver configuration
    #[arg(long)]
    pub nameserver: Option<String>,

    /// Exit code policy: never|spoofable
    ///
    /// With `spoofable`, a completed check of a spoofable domain exits with code 3.
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Print the JSON result on a single line
    #[arg(long)]
    pub compact: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        // --verbose only ever raises verbosity
        let log_level = if cli.verbose
            && log::LevelFilter::from(cli.log_level.clone()) < log::LevelFilter::Debug
        {
            LogLevel::Debug
        } else {
            cli.log_level
        };

        Config {
            domain: cli.domain,
            log_level,
            log_format: cli.log_format,
            dns_timeout_secs: cli.dns_timeout_secs,
            nameserver: cli.nameserver,
            fail_on: cli.fail_on,
            compact: cli.compact,
        }
    }
}
