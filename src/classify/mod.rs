//! Record classification and the spoofability verdict.
//!
//! Classification is pure string inspection over already-fetched records:
//! - SPF: the "all" qualifier decides how non-matching senders are handled
//! - DMARC: the `p=` tag decides what receivers do with failing mail
//!
//! Each classifier walks an ordered (substring, value) table and the first
//! match wins. Full SPF/DMARC grammars are not parsed.

mod dmarc;
mod spf;
mod verdict;

// Re-export public API
pub use dmarc::classify_dmarc;
pub use spf::classify_spf;
pub use verdict::{evaluate_verdict, SpoofReason, Verdict};
