//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

use crate::models::{DomainCheckResult, RecordKind};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver (e.g. an unparseable nameserver address).
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// The supplied string is not a syntactically valid domain name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("the domain name entered is not valid: {input:?}")]
pub struct ValidationError {
    /// The rejected input, as supplied.
    pub input: String,
}

/// A DNS query failed for a reason other than the name having no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// The query did not complete within the configured timeout.
    #[error("DNS query timed out")]
    Timeout,

    /// The server answered SERVFAIL.
    #[error("DNS server failure (SERVFAIL)")]
    ServFail,

    /// The server refused the query or answered with another error code.
    #[error("DNS server answered {0}")]
    ResponseCode(String),

    /// Any other resolver, transport, or protocol failure.
    #[error("DNS error: {0}")]
    Other(String),
}

/// A failed SPF or DMARC fetch, naming what was queried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{record} TXT lookup failed for {query_name}")]
pub struct LookupError {
    /// Fully built query name (`example.com` or `_dmarc.example.com`).
    pub query_name: String,
    /// Which record the lookup was for.
    pub record: RecordKind,
    /// The underlying resolver failure.
    #[source]
    pub source: DnsError,
}

/// Top-level error of a spoofability check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Input rejected before any DNS query was made. No result exists.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A DNS lookup failed. The check is aborted; `partial` holds the fields
    /// that were filled in before the failing fetch.
    #[error("spoofability check of {domain} aborted")]
    Lookup {
        /// The validated domain being checked.
        domain: String,
        /// The failing lookup.
        #[source]
        source: LookupError,
        /// Result state at the time of failure.
        partial: Box<DomainCheckResult>,
    },

    /// The resolver could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError {
            input: "-bad.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the domain name entered is not valid: \"-bad.com\""
        );
    }

    #[test]
    fn test_lookup_error_names_record_and_query() {
        let err = LookupError {
            query_name: "_dmarc.example.com".to_string(),
            record: RecordKind::Dmarc,
            source: DnsError::Timeout,
        };
        assert_eq!(
            err.to_string(),
            "DMARC TXT lookup failed for _dmarc.example.com"
        );
        let source = err.source().expect("lookup error should carry a source");
        assert_eq!(source.to_string(), "DNS query timed out");
    }

    #[test]
    fn test_check_error_validation_is_transparent() {
        let err = CheckError::from(ValidationError {
            input: String::new(),
        });
        assert!(err.to_string().starts_with("the domain name entered is not valid"));
    }

    #[test]
    fn test_initialization_error_message() {
        let err = InitializationError::DnsResolverError("bad address".to_string());
        assert_eq!(
            err.to_string(),
            "DNS resolver initialization error: bad address"
        );
    }
}
