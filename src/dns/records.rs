//! TXT record queries and the SPF/DMARC fetchers.

use log::{debug, info};

use crate::config::DMARC_LABEL;
use crate::dns::extract::{extract_dmarc_record, extract_spf_record};
use crate::dns::resolver::TxtResolver;
use crate::domain::DomainName;
use crate::error_handling::{DnsError, LookupError};
use crate::models::RecordKind;

/// Queries TXT records for a name.
///
/// # Arguments
///
/// * `name` - The name to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings. A name without TXT records (or that does
/// not exist) yields an empty vector.
///
/// # Errors
///
/// Returns `DnsError` on timeouts, server failures and transport errors.
pub async fn lookup_txt_records<R: TxtResolver>(
    name: &str,
    resolver: &R,
) -> Result<Vec<String>, DnsError> {
    debug!("Querying TXT records for {name}");
    let records = resolver.lookup_txt(name).await?;
    debug!("{} TXT record(s) returned for {name}", records.len());
    Ok(records)
}

/// Builds the name queried for a domain's DMARC record.
pub fn dmarc_query_name(domain: &DomainName) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// Fetches the SPF record published at the domain apex.
///
/// `Ok(None)` means the domain publishes no SPF record, which is a normal
/// outcome and not an error.
pub async fn fetch_spf<R: TxtResolver>(
    domain: &DomainName,
    resolver: &R,
) -> Result<Option<String>, LookupError> {
    fetch_record(domain.as_str(), RecordKind::Spf, resolver).await
}

/// Fetches the DMARC record published at `_dmarc.<domain>`.
///
/// `Ok(None)` means the domain publishes no DMARC record.
pub async fn fetch_dmarc<R: TxtResolver>(
    domain: &DomainName,
    resolver: &R,
) -> Result<Option<String>, LookupError> {
    fetch_record(&dmarc_query_name(domain), RecordKind::Dmarc, resolver).await
}

async fn fetch_record<R: TxtResolver>(
    query_name: &str,
    record: RecordKind,
    resolver: &R,
) -> Result<Option<String>, LookupError> {
    let txt_records = lookup_txt_records(query_name, resolver)
        .await
        .map_err(|source| LookupError {
            query_name: query_name.to_string(),
            record,
            source,
        })?;

    let found = match record {
        RecordKind::Spf => extract_spf_record(&txt_records),
        RecordKind::Dmarc => extract_dmarc_record(&txt_records),
    };

    match &found {
        Some(value) => debug!("Found {record} record at {query_name}: {value}"),
        None => info!("No {record} record published at {query_name}"),
    }
    Ok(found)
}
