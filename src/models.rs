//! Result record produced by a spoofability check.
//!
//! `DomainCheckResult` is created right after the domain passes validation and
//! is filled in fetch-then-classify order by the pipeline in `lib.rs`. Only the
//! crate can mutate it; callers get a finished value.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::domain::DomainName;

/// Failure handling strength derived from an SPF record's "all" qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SpfFailureType {
    /// `~all`
    Soft,
    /// `-all`
    Hard,
    /// `?all`
    Neutral,
    /// No record, or no recognized qualifier.
    #[default]
    Unset,
}

/// Enforcement policy derived from a DMARC record's `p=` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DmarcPolicy {
    /// `p=quarantine`
    Quarantine,
    /// `p=reject`
    Reject,
    /// No record, or a policy that does not enforce (`p=none`, missing tag).
    #[default]
    Unset,
}

/// The kind of email-authentication record being looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RecordKind {
    /// Sender Policy Framework record at the domain apex.
    #[strum(serialize = "SPF")]
    Spf,
    /// DMARC record at `_dmarc.<domain>`.
    #[strum(serialize = "DMARC")]
    Dmarc,
}

/// Everything learned about a domain during one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCheckResult {
    domain_name: String,
    spf_record: Option<String>,
    spf_failure_type: SpfFailureType,
    dmarc_record: Option<String>,
    dmarc_policy: DmarcPolicy,
    spoofable: bool,
}

impl DomainCheckResult {
    /// Creates an empty result for a domain that already passed validation.
    pub(crate) fn new(domain: &DomainName) -> Self {
        Self {
            domain_name: domain.as_str().to_string(),
            spf_record: None,
            spf_failure_type: SpfFailureType::Unset,
            dmarc_record: None,
            dmarc_policy: DmarcPolicy::Unset,
            spoofable: false,
        }
    }

    /// The validated, lowercased domain name.
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Raw SPF TXT value, if the domain publishes one.
    pub fn spf_record(&self) -> Option<&str> {
        self.spf_record.as_deref()
    }

    /// Strength of the SPF "all" qualifier.
    pub fn spf_failure_type(&self) -> SpfFailureType {
        self.spf_failure_type
    }

    /// Raw DMARC TXT value, if the domain publishes one.
    pub fn dmarc_record(&self) -> Option<&str> {
        self.dmarc_record.as_deref()
    }

    /// Enforcement strength of the DMARC policy.
    pub fn dmarc_policy(&self) -> DmarcPolicy {
        self.dmarc_policy
    }

    /// Final verdict.
    pub fn spoofable(&self) -> bool {
        self.spoofable
    }

    pub(crate) fn set_spf_record(&mut self, record: Option<String>) {
        self.spf_record = record;
    }

    pub(crate) fn set_dmarc_record(&mut self, record: Option<String>) {
        self.dmarc_record = record;
    }

    pub(crate) fn set_spf_failure_type(&mut self, failure_type: SpfFailureType) {
        self.spf_failure_type = failure_type;
    }

    pub(crate) fn set_dmarc_policy(&mut self, policy: DmarcPolicy) {
        self.dmarc_policy = policy;
    }

    pub(crate) fn set_spoofable(&mut self, spoofable: bool) {
        self.spoofable = spoofable;
    }
}
