//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::ValueEnum;

use crate::config::constants::DNS_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for a completed check.
///
/// Fatal errors always exit with 1; this only decides what a successful check
/// that found a spoofable domain exits with.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the check completes
    Never,
    /// Exit 2 when the domain is spoofable
    Spoofable,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through argument parsing.
///
/// # Examples
///
/// ```no_run
/// use domain_spoofcheck::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     dns_timeout_secs: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain to check
    pub domain: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_secs: u64,

    /// Nameserver (`IP` or `IP:PORT`) to query instead of the system configuration
    pub nameserver: Option<String>,

    /// Exit code policy
    pub fail_on: FailOn,

    /// Print the result on a single line
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            nameserver: None,
            fail_on: FailOn::Never,
            compact: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.dns_timeout_secs, DNS_TIMEOUT_SECS);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert_eq!(config.fail_on, FailOn::Never);
        assert!(config.nameserver.is_none());
        assert!(!config.compact);
    }
}
