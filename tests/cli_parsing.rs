//! Tests for CLI argument parsing.

use clap::Parser;
use domain_spoofcheck::config::{Cli, FailOn, LogFormat, LogLevel, DNS_TIMEOUT_SECS};
use domain_spoofcheck::Config;

#[test]
fn test_domain_is_required() {
    let result = Cli::try_parse_from(["domain_spoofcheck"]);
    assert!(result.is_err());
}

#[test]
fn test_minimal_invocation_uses_defaults() {
    let cli = Cli::try_parse_from(["domain_spoofcheck", "example.com"]).unwrap();
    assert_eq!(cli.domain, "example.com");
    assert!(!cli.verbose);
    assert_eq!(cli.log_level, LogLevel::Warn);
    assert_eq!(cli.log_format, LogFormat::Plain);
    assert_eq!(cli.dns_timeout_secs, DNS_TIMEOUT_SECS);
    assert_eq!(cli.nameserver, None);
    assert_eq!(cli.fail_on, FailOn::Never);
    assert!(!cli.compact);
}

#[test]
fn test_all_options() {
    let cli = Cli::try_parse_from([
        "domain_spoofcheck",
        "example.com",
        "--verbose",
        "--log-format",
        "json",
        "--dns-timeout-secs",
        "2",
        "--nameserver",
        "9.9.9.9",
        "--fail-on",
        "spoofable",
        "--compact",
    ])
    .unwrap();

    let config = Config::from(cli);
    assert_eq!(config.domain, "example.com");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.dns_timeout_secs, 2);
    assert_eq!(config.nameserver.as_deref(), Some("9.9.9.9"));
    assert_eq!(config.fail_on, FailOn::Spoofable);
    assert!(config.compact);
}

#[test]
fn test_short_verbose_flag() {
    let cli = Cli::try_parse_from(["domain_spoofcheck", "-v", "example.com"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Cli::try_parse_from(["domain_spoofcheck", "example.com", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_fail_on_rejected() {
    let result = Cli::try_parse_from(["domain_spoofcheck", "example.com", "--fail-on", "always"]);
    assert!(result.is_err());
}

#[test]
fn test_non_numeric_timeout_rejected() {
    let result = Cli::try_parse_from([
        "domain_spoofcheck",
        "example.com",
        "--dns-timeout-secs",
        "soon",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_domain_is_not_validated_by_parser() {
    // Syntax checking belongs to the pipeline, not argument parsing
    let cli = Cli::try_parse_from(["domain_spoofcheck", "not_a_domain"]).unwrap();
    assert_eq!(cli.domain, "not_a_domain");
}
