//! Error handling.
//!
//! This module provides the error types returned by the library:
//! - **Initialization errors**: logger or DNS resolver could not be set up
//! - **Validation errors**: the input is not a syntactically valid domain name
//! - **DNS errors**: transport or protocol failures reported by the resolver
//! - **Lookup errors**: a DNS error tied to the record and name that was queried
//! - **Check errors**: the top-level error of a spoofability check
//!
//! A domain without SPF or DMARC records is not an error: absence is a normal
//! outcome that feeds the verdict.

mod types;

// Re-export public API
pub use types::{CheckError, DnsError, InitializationError, LookupError, ValidationError};
