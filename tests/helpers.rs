// Shared test helpers for building in-memory DNS fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use domain_spoofcheck::dns::StaticTxtResolver;

/// A resolver publishing the given SPF and DMARC TXT strings for `domain`.
/// `None` leaves the corresponding name without records.
#[allow(dead_code)] // Used by other test files
pub fn resolver_for(domain: &str, spf: Option<&str>, dmarc: Option<&str>) -> StaticTxtResolver {
    let mut resolver = StaticTxtResolver::new();
    if let Some(spf) = spf {
        resolver = resolver.with_txt(domain, [spf]);
    }
    if let Some(dmarc) = dmarc {
        resolver = resolver.with_txt(&format!("_dmarc.{domain}"), [dmarc]);
    }
    resolver
}
