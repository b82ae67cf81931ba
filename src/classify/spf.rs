//! SPF "all" qualifier classification.

use crate::models::SpfFailureType;

/// Qualifiers in precedence order.
const SPF_QUALIFIERS: &[(&str, SpfFailureType)] = &[
    ("~all", SpfFailureType::Soft),
    ("-all", SpfFailureType::Hard),
    ("?all", SpfFailureType::Neutral),
];

/// Classifies the failure handling of an SPF record.
///
/// The record is searched for `~all`, `-all` and `?all`, in that order; the
/// first one present wins. An absent record, or one with none of the
/// qualifiers (e.g. `+all` or a `redirect=`), is `Unset`.
pub fn classify_spf(record: Option<&str>) -> SpfFailureType {
    record
        .and_then(|text| {
            SPF_QUALIFIERS
                .iter()
                .find(|(needle, _)| text.contains(needle))
                .map(|(_, failure_type)| *failure_type)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_spf_absent() {
        assert_eq!(classify_spf(None), SpfFailureType::Unset);
    }

    #[test]
    fn test_classify_spf_soft() {
        assert_eq!(
            classify_spf(Some("v=spf1 include:_spf.example.com ~all")),
            SpfFailureType::Soft
        );
    }

    #[test]
    fn test_classify_spf_hard() {
        assert_eq!(classify_spf(Some("v=spf1 -all")), SpfFailureType::Hard);
    }

    #[test]
    fn test_classify_spf_neutral() {
        assert_eq!(
            classify_spf(Some("v=spf1 ip4:192.0.2.0/24 ?all")),
            SpfFailureType::Neutral
        );
    }

    #[test]
    fn test_classify_spf_no_qualifier() {
        assert_eq!(
            classify_spf(Some("v=spf1 redirect=_spf.example.com")),
            SpfFailureType::Unset
        );
        assert_eq!(classify_spf(Some("v=spf1 +all")), SpfFailureType::Unset);
        assert_eq!(classify_spf(Some("")), SpfFailureType::Unset);
    }

    #[test]
    fn test_classify_spf_soft_wins_over_hard() {
        assert_eq!(
            classify_spf(Some("v=spf1 -all ~all")),
            SpfFailureType::Soft
        );
    }

    #[test]
    fn test_classify_spf_hard_wins_over_neutral() {
        assert_eq!(
            classify_spf(Some("v=spf1 ?all -all")),
            SpfFailureType::Hard
        );
    }

    #[test]
    fn test_classify_spf_is_case_sensitive() {
        assert_eq!(classify_spf(Some("v=spf1 -ALL")), SpfFailureType::Unset);
    }
}
