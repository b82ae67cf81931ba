//! Tests for exit code policies (--fail-on flag) and fatal error exits.
//!
//! The binary tests only use inputs that fail before any DNS query.

use std::process::Command;

use domain_spoofcheck::app::{evaluate_exit_code, EXIT_FATAL, EXIT_SPOOFABLE, EXIT_SUCCESS};
use domain_spoofcheck::check_domain;
use domain_spoofcheck::dns::StaticTxtResolver;
use domain_spoofcheck::FailOn;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_domain_spoofcheck"))
}

#[tokio::test]
async fn test_fail_on_never_always_returns_zero() {
    let resolver = StaticTxtResolver::new();
    let result = check_domain("example.com", &resolver).await.unwrap();
    assert!(result.spoofable());
    assert_eq!(evaluate_exit_code(&FailOn::Never, &result), EXIT_SUCCESS);
}

#[tokio::test]
async fn test_fail_on_spoofable_with_spoofable_domain() {
    let resolver = StaticTxtResolver::new().with_txt("example.com", ["v=spf1 ~all"]);
    let result = check_domain("example.com", &resolver).await.unwrap();
    assert_eq!(evaluate_exit_code(&FailOn::Spoofable, &result), EXIT_SPOOFABLE);
}

#[tokio::test]
async fn test_fail_on_spoofable_with_protected_domain() {
    let resolver = StaticTxtResolver::new()
        .with_txt("example.com", ["v=spf1 -all"])
        .with_txt("_dmarc.example.com", ["v=DMARC1; p=reject"]);
    let result = check_domain("example.com", &resolver).await.unwrap();
    assert_eq!(evaluate_exit_code(&FailOn::Spoofable, &result), EXIT_SUCCESS);
}

#[test]
fn test_invalid_domain_exits_fatal() {
    let output = binary().args(["--", "-bad.com"]).output().unwrap();
    assert_eq!(output.status.code(), Some(EXIT_FATAL));
    assert!(output.stdout.is_empty(), "no result may be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("the domain name entered is not valid"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_bad_nameserver_exits_fatal() {
    let output = binary()
        .args(["example.com", "--nameserver", "not-an-ip"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(EXIT_FATAL));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid nameserver address"), "unexpected stderr: {stderr}");
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = binary().output().unwrap();
    // clap reports usage errors with exit code 2
    assert_eq!(output.status.code(), Some(2));
    assert_ne!(output.status.code(), Some(EXIT_SPOOFABLE));
    assert_ne!(output.status.code(), Some(EXIT_FATAL));
}
