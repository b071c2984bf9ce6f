//! What-if estimates for removing findings.
//!
//! Linear model: each matched finding carries an equal share of the current
//! likelihood. This is an approximation and does not re-run the posterior.

use realdiag_core::types::truthy;

/// Estimated likelihood decrease when `findings_removed` of `total_findings`
/// findings are dropped.
///
/// Returns 0 when `current_likelihood` is absent, zero, or NaN, or when
/// there are no findings. The decrease never exceeds the current likelihood.
pub fn what_if_impact(
    current_likelihood: Option<f64>,
    total_findings: usize,
    findings_removed: usize,
) -> f64 {
    let Some(current) = truthy(current_likelihood) else {
        return 0.0;
    };
    if total_findings == 0 {
        return 0.0;
    }

    let impact_per_finding = current / total_findings as f64;
    let total_impact = impact_per_finding * findings_removed as f64;

    if total_impact > current {
        current
    } else {
        total_impact
    }
}
