//! Human-readable decision traces.
//!
//! Lines are emitted in a fixed order: match score, matched presentations,
//! test characteristics, calculated probability, clinical pearls. Sections
//! without data are skipped, never replaced by a placeholder.

use realdiag_core::types::DiagnosticResult;

use super::bayes::LikelihoodModel;
use super::fixed::to_fixed;

/// Build the reasoning trace for `result` under the default model.
pub fn generate_trace(result: &DiagnosticResult, posterior: Option<f64>) -> Vec<String> {
    build_trace(&LikelihoodModel::DEFAULT, result, posterior)
}

pub(crate) fn build_trace(
    model: &LikelihoodModel,
    result: &DiagnosticResult,
    posterior: Option<f64>,
) -> Vec<String> {
    let mut trace = Vec::with_capacity(6 + result.matched_presentations.len());

    trace.push(format!(
        "Initial match score: {}/10",
        to_fixed(result.match_score, 1)
    ));

    if !result.matched_presentations.is_empty() {
        trace.push(format!(
            "Matched {} clinical presentation(s)",
            result.matched_presentations.len()
        ));
        for (i, presentation) in result.matched_presentations.iter().enumerate() {
            trace.push(format!("  {}. {}", i + 1, presentation));
        }
    }

    if let Some((sensitivity, specificity)) = result.test_characteristics() {
        trace.push(format!(
            "Test characteristics: Sensitivity {}%, Specificity {}%",
            to_fixed(sensitivity * 100.0, 0),
            to_fixed(specificity * 100.0, 0)
        ));
        trace.push(format!(
            "Positive likelihood ratio: {}",
            to_fixed(model.likelihood_ratio(sensitivity, specificity), 2)
        ));
    }

    if let Some(p) = posterior.filter(|p| !p.is_nan()) {
        trace.push(format!(
            "Calculated probability: {}% ({} confidence)",
            to_fixed(p, 1),
            model.band(Some(p)).label()
        ));
    }

    if !result.clinical_pearls.is_empty() {
        trace.push("Clinical pearls support diagnosis".to_string());
    }

    trace
}
