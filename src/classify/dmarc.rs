//! DMARC policy classification.

use crate::models::DmarcPolicy;

/// Policies in precedence order.
const DMARC_POLICIES: &[(&str, DmarcPolicy)] = &[
    ("p=quarantine", DmarcPolicy::Quarantine),
    ("p=reject", DmarcPolicy::Reject),
];

/// Classifies the enforcement policy of a DMARC record.
///
/// `p=quarantine` is checked before `p=reject`. Anything else, including
/// `p=none` or an absent record, is `Unset`.
pub fn classify_dmarc(record: Option<&str>) -> DmarcPolicy {
    record
        .and_then(|text| {
            DMARC_POLICIES
                .iter()
                .find(|(needle, _)| text.contains(needle))
                .map(|(_, policy)| *policy)
        })
        .unwrap_or_default()
}
