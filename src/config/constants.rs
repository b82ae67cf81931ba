//! Configuration constants.
//!
//! This module defines the constants used throughout the application: DNS
//! timeouts, record version tags and the domain-name grammar.

/// DNS query timeout in seconds
/// Most TXT lookups complete in well under a second; 5s leaves room for slow
/// authoritative servers without hanging the check.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Resolver attempts per query. One attempt means no retries.
pub const DNS_ATTEMPTS: usize = 1;

/// Default DNS port used when `--nameserver` is given without one.
pub const DNS_PORT: u16 = 53;

// Record version tags
/// Prefix identifying an SPF record among a domain's TXT records.
pub const SPF_VERSION_TAG: &str = "v=spf1";
/// Prefix identifying a DMARC record among `_dmarc.<domain>` TXT records.
pub const DMARC_VERSION_TAG: &str = "v=DMARC1";
/// Label prepended to a domain to find its DMARC record.
pub const DMARC_LABEL: &str = "_dmarc";

/// Domain-name grammar: dot-separated labels of 1-63 characters, lowercase
/// alphanumerics and hyphens, no leading or trailing hyphen, at least two
/// labels. Anchored at both ends.
pub const DOMAIN_NAME_PATTERN: &str =
    r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$";
