//! domain_spoofcheck library: email domain spoofability checks
//!
//! This library looks up a domain's SPF and DMARC DNS records, classifies how
//! strictly they are enforced and decides whether a third party could send
//! mail that appears to come from the domain without it being rejected.
//!
//! # Example
//!
//! ```no_run
//! use domain_spoofcheck::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = run_check(&config).await?;
//! println!("{} spoofable: {}", result.domain_name(), result.spoofable());
//! # Ok(())
//! # }
//! ```
//!
//! Checks can also run against any `TxtResolver`, e.g. the in-memory
//! `StaticTxtResolver`:
//!
//! ```
//! use domain_spoofcheck::check_domain;
//! use domain_spoofcheck::dns::StaticTxtResolver;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let resolver = StaticTxtResolver::new()
//!     .with_txt("example.com", ["v=spf1 -all"])
//!     .with_txt("_dmarc.example.com", ["v=DMARC1; p=reject;"]);
//!
//! let result = check_domain("example.com", &resolver).await.unwrap();
//! assert!(!result.spoofable());
//! # }
//! ```
//!
//! # Requirements
//!
//! DNS lookups are async and require a Tokio runtime. The binary runs a
//! single-threaded runtime and performs the two lookups one after the other.

#![warn(missing_docs)]

pub mod app;
pub mod classify;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
mod models;

// Re-export public API
pub use classify::{classify_dmarc, classify_spf, evaluate_verdict, SpoofReason, Verdict};
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use dns::{fetch_dmarc, fetch_spf, TxtResolver};
pub use domain::{validate_domain, DomainName};
pub use error_handling::{CheckError, DnsError, InitializationError, LookupError, ValidationError};
pub use models::{DmarcPolicy, DomainCheckResult, RecordKind, SpfFailureType};
pub use run::{check_domain, run_check};

// Internal run module (contains the check pipeline)
mod run {
    use log::{debug, info};

    use crate::classify::{classify_dmarc, classify_spf, evaluate_verdict};
    use crate::config::Config;
    use crate::dns::{fetch_dmarc, fetch_spf, TxtResolver};
    use crate::domain::{validate_domain, DomainName};
    use crate::error_handling::{CheckError, LookupError};
    use crate::initialization::init_resolver;
    use crate::models::DomainCheckResult;

    /// Checks a domain using the resolver described by `config`.
    ///
    /// The domain is validated before the resolver is built, so invalid input
    /// never touches the network.
    ///
    /// # Errors
    ///
    /// - `CheckError::Validation` if `config.domain` is not a valid domain name
    /// - `CheckError::Initialization` if the resolver cannot be configured
    /// - `CheckError::Lookup` if a TXT query fails for a reason other than absence
    pub async fn run_check(config: &Config) -> Result<DomainCheckResult, CheckError> {
        let domain = validate_domain(&config.domain)?;
        let resolver = init_resolver(config)?;
        check_validated(domain, &resolver).await
    }

    /// Checks whether `domain` can be spoofed, querying DNS through `resolver`.
    ///
    /// Steps run strictly in order: validate, fetch SPF, fetch DMARC, classify
    /// SPF, classify DMARC, decide. Each fetch issues exactly one TXT query.
    ///
    /// # Errors
    ///
    /// - `CheckError::Validation` before any query if `domain` is malformed
    /// - `CheckError::Lookup` if a query fails; the error carries the partial result
    pub async fn check_domain<R: TxtResolver>(
        domain: &str,
        resolver: &R,
    ) -> Result<DomainCheckResult, CheckError> {
        let domain = validate_domain(domain)?;
        check_validated(domain, resolver).await
    }

    async fn check_validated<R: TxtResolver>(
        domain: DomainName,
        resolver: &R,
    ) -> Result<DomainCheckResult, CheckError> {
        debug!("Checking {domain}");
        let mut result = DomainCheckResult::new(&domain);

        debug!("Fetching SPF record for {domain}");
        let spf = fetch_spf(&domain, resolver)
            .await
            .map_err(|e| aborted(&domain, e, &result))?;
        result.set_spf_record(spf);

        debug!("Fetching DMARC record for {domain}");
        let dmarc = fetch_dmarc(&domain, resolver)
            .await
            .map_err(|e| aborted(&domain, e, &result))?;
        result.set_dmarc_record(dmarc);

        let spf_failure_type = classify_spf(result.spf_record());
        debug!("SPF failure type for {domain}: {spf_failure_type}");
        result.set_spf_failure_type(spf_failure_type);

        let dmarc_policy = classify_dmarc(result.dmarc_record());
        debug!("DMARC policy for {domain}: {dmarc_policy}");
        result.set_dmarc_policy(dmarc_policy);

        let verdict = evaluate_verdict(&result);
        if verdict.spoofable {
            let reasons: Vec<String> = verdict.reasons.iter().map(ToString::to_string).collect();
            info!("{domain} is spoofable: {}", reasons.join(", "));
        } else {
            info!("{domain} is not spoofable");
        }
        result.set_spoofable(verdict.spoofable);

        Ok(result)
    }

    fn aborted(domain: &DomainName, source: LookupError, partial: &DomainCheckResult) -> CheckError {
        CheckError::Lookup {
            domain: domain.to_string(),
            source,
            partial: Box::new(partial.clone()),
        }
    }
}
