//! DNS record extraction utilities.
//!
//! This module provides functions to pick SPF and DMARC records out of
//! TXT record collections by their version tag.

use crate::config::{DMARC_VERSION_TAG, SPF_VERSION_TAG};

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1" (compared case-insensitively).
///
/// # Arguments
///
/// * `txt_records` - Vector of TXT record strings
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    find_tagged(txt_records, SPF_VERSION_TAG)
}

/// Extracts DMARC record from TXT records.
///
/// DMARC records live at `_dmarc.<domain>` and start with "v=DMARC1"
/// (compared case-insensitively).
///
/// # Arguments
///
/// * `txt_records` - Vector of TXT record strings
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    find_tagged(txt_records, DMARC_VERSION_TAG)
}

fn find_tagged(txt_records: &[String], tag: &str) -> Option<String> {
    txt_records
        .iter()
        .map(|txt| txt.trim())
        .find(|txt| {
            txt.get(..tag.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tag))
        })
        .map(str::to_string)
}
