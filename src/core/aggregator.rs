//! Aggregation of settled check results into one overall status

use crate::core::types::{CheckResult, OverallStatus};

/// Map a set of settled results to an overall status.
///
/// Every enabled check weighs the same: all passed is [`OverallStatus::Secure`],
/// none passed is [`OverallStatus::Insecure`], a mix is
/// [`OverallStatus::PartiallySecure`], and an empty set is
/// [`OverallStatus::Unknown`]. Weighted or critical-check schemes are a
/// product decision this engine deliberately does not bake in.
pub fn aggregate(results: &[CheckResult]) -> OverallStatus {
    if results.is_empty() {
        return OverallStatus::Unknown;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    if passed == results.len() {
        OverallStatus::Secure
    } else if passed == 0 {
        OverallStatus::Insecure
    } else {
        OverallStatus::PartiallySecure
    }
}

/// Aggregate for a finished run, accounting for how it ended.
///
/// A run that ended early saw only a prefix of the enabled checks; even if
/// everything that settled passed, the unprobed remainder means full security
/// was never attested, so the verdict is capped at
/// [`OverallStatus::PartiallySecure`].
pub fn aggregate_run(results: &[CheckResult], complete: bool) -> OverallStatus {
    let status = aggregate(results);
    if !complete && status == OverallStatus::Secure {
        OverallStatus::PartiallySecure
    } else {
        status
    }
}
