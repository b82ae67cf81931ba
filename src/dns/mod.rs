//! DNS TXT lookups for email-authentication records.
//!
//! This module provides:
//! - The `TxtResolver` seam, with a `hickory-resolver` backed implementation
//!   and an in-memory one
//! - TXT record queries with absence separated from real failures
//! - SPF/DMARC record extraction and the two record fetchers
//!
//! Each fetch issues exactly one TXT query. Caching, retries and recursion are
//! left to the resolver.

mod extract;
mod records;
mod resolver;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record};
pub use records::{dmarc_query_name, fetch_dmarc, fetch_spf, lookup_txt_records};
pub use resolver::{HickoryTxtResolver, StaticTxtResolver, TxtResolver};
