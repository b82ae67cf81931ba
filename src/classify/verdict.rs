//! Spoofability decision rule.

use strum_macros::Display;

use crate::models::{DmarcPolicy, DomainCheckResult, SpfFailureType};

/// A condition that makes a domain spoofable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SpoofReason {
    /// No SPF record is published.
    #[strum(serialize = "no SPF record")]
    MissingSpf,
    /// The SPF record ends in `~all`, so failing mail is only marked.
    #[strum(serialize = "SPF soft-fails (~all)")]
    SoftFailSpf,
    /// No DMARC record is published.
    #[strum(serialize = "no DMARC record")]
    MissingDmarc,
    /// No DMARC record, or one whose policy neither quarantines nor rejects.
    #[strum(serialize = "DMARC policy does not quarantine or reject")]
    UnenforcedDmarc,
}

/// Outcome of the decision rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// True when any reason fired.
    pub spoofable: bool,
    /// Every condition that held, in rule order.
    pub reasons: Vec<SpoofReason>,
}

/// Applies the spoofability rule to a fetched and classified result.
///
/// A domain is spoofable when any of these hold:
/// 1. it has no SPF record
/// 2. its SPF failure type is `Soft`
/// 3. it has no DMARC record
/// 4. its DMARC policy is `Unset`
///
/// `Neutral` and `Hard` SPF records are not flagged on their own.
pub fn evaluate_verdict(result: &DomainCheckResult) -> Verdict {
    let conditions = [
        (result.spf_record().is_none(), SpoofReason::MissingSpf),
        (
            result.spf_failure_type() == SpfFailureType::Soft,
            SpoofReason::SoftFailSpf,
        ),
        (result.dmarc_record().is_none(), SpoofReason::MissingDmarc),
        (
            result.dmarc_policy() == DmarcPolicy::Unset,
            SpoofReason::UnenforcedDmarc,
        ),
    ];

    let reasons: Vec<SpoofReason> = conditions
        .into_iter()
        .filter_map(|(holds, reason)| holds.then_some(reason))
        .collect();

    Verdict {
        spoofable: !reasons.is_empty(),
        reasons,
    }
}
