//! Top-level LikelihoodScorer: evaluates candidates into display-ready
//! outcomes and ranks whole result lists.

use rayon::prelude::*;

use realdiag_core::config::ScoringConfig;
use realdiag_core::types::DiagnosticResult;

use super::bayes::LikelihoodModel;
use super::ranking::{compare_keys, effective_likelihood};
use super::trace::build_trace;
use super::types::LikelihoodOutcome;
use super::what_if::what_if_impact;

/// Evaluates diagnostic results under one [`LikelihoodModel`].
///
/// Stateless apart from the model; `evaluate` is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct LikelihoodScorer {
    model: LikelihoodModel,
}

impl LikelihoodScorer {
    pub fn new(model: LikelihoodModel) -> Self {
        Self { model }
    }

    /// Scorer with the default model.
    pub fn with_defaults() -> Self {
        Self::new(LikelihoodModel::DEFAULT)
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(LikelihoodModel::from_config(config))
    }

    /// Compute posterior, band, color, and trace for one result.
    pub fn evaluate(&self, result: &DiagnosticResult) -> LikelihoodOutcome {
        let posterior = self.model.posterior(result);
        let band = self.model.band(posterior);

        LikelihoodOutcome {
            label: result.label.clone(),
            posterior,
            band,
            confidence_level: band.label().to_string(),
            confidence_color: band.color().to_string(),
            trace: build_trace(&self.model, result, posterior),
            effective_likelihood: effective_likelihood(&self.model, result),
            finding_count: result.matched_presentations.len(),
        }
    }

    /// Evaluate every result and return outcomes, most likely first.
    ///
    /// Evaluation runs in parallel; ties keep their input order.
    pub fn score_batch(&self, results: &[DiagnosticResult]) -> Vec<LikelihoodOutcome> {
        let mut outcomes: Vec<LikelihoodOutcome> =
            results.par_iter().map(|r| self.evaluate(r)).collect();

        outcomes.sort_by(|a, b| compare_keys(a.effective_likelihood, b.effective_likelihood));

        tracing::debug!(
            count = outcomes.len(),
            with_posterior = outcomes.iter().filter(|o| o.posterior.is_some()).count(),
            top = outcomes.first().map(|o| o.label.as_str()).unwrap_or(""),
            "scored diagnostic batch"
        );

        outcomes
    }

    /// Estimated decrease if `findings_removed` matched findings were dropped.
    pub fn what_if(&self, outcome: &LikelihoodOutcome, findings_removed: usize) -> f64 {
        what_if_impact(outcome.posterior, outcome.finding_count, findings_removed)
    }
}
