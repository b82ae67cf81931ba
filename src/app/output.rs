//! Result rendering and exit codes.

use crate::config::FailOn;
use crate::models::DomainCheckResult;

/// Check completed (or spoofable results are not treated as failures).
pub const EXIT_SUCCESS: i32 = 0;
/// Validation, lookup or initialization failure.
pub const EXIT_FATAL: i32 = 1;
/// Check completed, domain is spoofable and `--fail-on spoofable` was given.
pub const EXIT_SPOOFABLE: i32 = 3;

/// Serializes a result as JSON, pretty-printed unless `compact` is set.
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_result(
    result: &DomainCheckResult,
    compact: bool,
) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(result)
    } else {
        serde_json::to_string_pretty(result)
    }
}

/// Maps a completed check to a process exit code under the given policy.
pub fn evaluate_exit_code(fail_on: &FailOn, result: &DomainCheckResult) -> i32 {
    match fail_on {
        FailOn::Never => EXIT_SUCCESS,
        FailOn::Spoofable if result.spoofable() => EXIT_SPOOFABLE,
        FailOn::Spoofable => EXIT_SUCCESS,
    }
}
