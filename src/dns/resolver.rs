//! TXT resolver implementations.
//!
//! `TxtResolver` is the only way the pipeline talks to DNS. The production
//! implementation wraps `hickory-resolver`; `StaticTxtResolver` answers from an
//! in-memory table so checks can run without a network.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::warn;

use crate::error_handling::DnsError;

/// Resolves TXT records for a name.
///
/// Implementations return `Ok(vec![])` when the name has no TXT records or
/// does not exist, and `Err` only for genuine lookup failures.
pub trait TxtResolver {
    /// Looks up the TXT records of `name`, one string per record.
    fn lookup_txt(&self, name: &str)
        -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

/// `TxtResolver` backed by a `hickory-resolver` `TokioAsyncResolver`.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryTxtResolver {
    /// Wraps an already configured resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        // Query the name as absolute so search domains are never appended
        let fqdn = if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{name}.")
        };

        match self.resolver.lookup(fqdn.as_str(), RecordType::TXT).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            // TXT records can be split into several character-strings - join them
                            Some(
                                txt.iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(txt_records)
            }
            Err(e) if is_absent(&e) => Ok(Vec::new()),
            Err(e) => {
                let err = classify_error(&e);
                if err == DnsError::Timeout {
                    warn!("TXT record lookup timed out for {name}: {e}");
                } else {
                    warn!("Failed to lookup TXT records for {name}: {e}");
                }
                Err(err)
            }
        }
    }
}

/// NOERROR without data and NXDOMAIN both mean "nothing published here".
fn is_absent(e: &ResolveError) -> bool {
    matches!(
        e.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError | ResponseCode::NXDomain,
            ..
        }
    )
}

fn classify_error(e: &ResolveError) -> DnsError {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::ServFail => DnsError::ServFail,
            code => DnsError::ResponseCode(code.to_string()),
        },
        ResolveErrorKind::Timeout => DnsError::Timeout,
        _ => {
            let msg = e.to_string();
            if msg.contains("timed out") || msg.contains("timeout") {
                DnsError::Timeout
            } else {
                DnsError::Other(msg)
            }
        }
    }
}

/// In-memory `TxtResolver`.
///
/// Names without an entry behave like NXDOMAIN. Every queried name is recorded
/// so callers can assert what was (or was not) looked up.
///
/// # Examples
///
/// ```
/// use domain_spoofcheck::dns::StaticTxtResolver;
///
/// let resolver = StaticTxtResolver::new()
///     .with_txt("example.com", ["v=spf1 -all"])
///     .with_txt("_dmarc.example.com", ["v=DMARC1; p=reject;"]);
/// assert!(resolver.queried_names().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StaticTxtResolver {
    answers: HashMap<String, Result<Vec<String>, DnsError>>,
    queried: Mutex<Vec<String>>,
}

impl StaticTxtResolver {
    /// Creates a resolver with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes TXT records for `name`.
    pub fn with_txt<I, S>(mut self, name: &str, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = records.into_iter().map(Into::into).collect();
        self.answers.insert(normalize_name(name), Ok(records));
        self
    }

    /// Makes every lookup of `name` fail with `error`.
    pub fn with_failure(mut self, name: &str, error: DnsError) -> Self {
        self.answers.insert(normalize_name(name), Err(error));
        self
    }

    /// Names looked up so far, in query order.
    pub fn queried_names(&self) -> Vec<String> {
        self.queried
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of lookups issued so far.
    pub fn query_count(&self) -> usize {
        self.queried
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl TxtResolver for StaticTxtResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        let name = normalize_name(name);
        self.queried
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(name.clone());
        self.answers.get(&name).cloned().unwrap_or(Ok(Vec::new()))
    }
}

fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
