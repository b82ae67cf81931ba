//! Domain name validation.
//!
//! Every check starts here: the input is normalized and matched against the
//! domain-name grammar before any DNS query is made. A `DomainName` can only be
//! obtained through `validate_domain`, so holding one proves the check passed.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DOMAIN_NAME_PATTERN;
use crate::error_handling::ValidationError;

static DOMAIN_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOMAIN_NAME_PATTERN).unwrap_or_else(|e| panic!("invalid domain pattern: {e}"))
});

/// A syntactically valid, lowercased domain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// The normalized domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates a user-supplied domain name.
///
/// Surrounding whitespace is trimmed and the input is lowercased before it is
/// matched, so `Example.COM` is accepted as `example.com`. The grammar itself
/// only admits lowercase alphanumerics and hyphens.
///
/// # Errors
///
/// Returns `ValidationError` carrying the original input if it does not match
/// the domain-name grammar.
pub fn validate_domain(input: &str) -> Result<DomainName, ValidationError> {
    let normalized = input.trim().to_ascii_lowercase();
    if DOMAIN_NAME_RE.is_match(&normalized) {
        Ok(DomainName(normalized))
    } else {
        Err(ValidationError {
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
