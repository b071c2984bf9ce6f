//! Posterior probability from test characteristics and match strength.
//!
//! ```text
//! LR+        = sensitivity / (1 - specificity + epsilon)
//! matchRatio = match_score / scale
//! num        = LR+ * prior * matchRatio
//! posterior  = num / (num + (1 - prior))
//! result     = min(posterior * 100, cap)
//! ```
//!
//! The match ratio is not clamped and there is no lower bound on the result.

use realdiag_core::config::ScoringConfig;
use realdiag_core::constants::{
    DEFAULT_BAND_THRESHOLDS, DEFAULT_BASE_PROBABILITY, DEFAULT_LR_EPSILON,
    DEFAULT_MATCH_SCORE_SCALE, DEFAULT_POSTERIOR_CAP,
};
use realdiag_core::types::DiagnosticResult;

use super::types::ConfidenceBand;

/// Parameters of the likelihood computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikelihoodModel {
    pub base_probability: f64,
    pub lr_epsilon: f64,
    pub posterior_cap: f64,
    pub match_score_scale: f64,
    pub band_thresholds: [f64; 4],
}

impl LikelihoodModel {
    /// The default model: 10% prior, 0.001 epsilon, 99% cap, 0-10 scores.
    pub const DEFAULT: LikelihoodModel = LikelihoodModel {
        base_probability: DEFAULT_BASE_PROBABILITY,
        lr_epsilon: DEFAULT_LR_EPSILON,
        posterior_cap: DEFAULT_POSTERIOR_CAP,
        match_score_scale: DEFAULT_MATCH_SCORE_SCALE,
        band_thresholds: DEFAULT_BAND_THRESHOLDS,
    };

    /// Build a model from (already validated) scoring config.
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            base_probability: config.effective_base_probability(),
            lr_epsilon: config.effective_lr_epsilon(),
            posterior_cap: config.effective_posterior_cap(),
            match_score_scale: config.effective_match_score_scale(),
            band_thresholds: config.effective_band_thresholds(),
        }
    }

    /// Positive likelihood ratio with this model's epsilon.
    pub fn likelihood_ratio(&self, sensitivity: f64, specificity: f64) -> f64 {
        positive_likelihood_ratio(sensitivity, specificity, self.lr_epsilon)
    }

    /// Posterior percentage for `result`.
    ///
    /// `None` when sensitivity or specificity is missing, zero, or NaN, and
    /// when the arithmetic itself produces NaN.
    pub fn posterior(&self, result: &DiagnosticResult) -> Option<f64> {
        let (sensitivity, specificity) = result.test_characteristics()?;

        let match_ratio = result.match_score / self.match_score_scale;
        let likelihood_ratio = self.likelihood_ratio(sensitivity, specificity);

        let prior = self.base_probability;
        let numerator = likelihood_ratio * prior * match_ratio;
        let denominator = numerator + (1.0 - prior);
        let posterior = numerator / denominator;

        let percentage = posterior * 100.0;
        if percentage.is_nan() {
            tracing::trace!(label = %result.label, "posterior is NaN, reporting unknown");
            return None;
        }
        Some(percentage.min(self.posterior_cap))
    }

    /// Band for a posterior under this model's thresholds.
    pub fn band(&self, posterior: Option<f64>) -> ConfidenceBand {
        ConfidenceBand::classify(posterior, &self.band_thresholds)
    }
}

impl Default for LikelihoodModel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `sensitivity / (1 - specificity + epsilon)`.
///
/// The epsilon keeps a specificity of 1.0 finite and biases every ratio
/// slightly downward.
#[inline]
pub fn positive_likelihood_ratio(sensitivity: f64, specificity: f64, epsilon: f64) -> f64 {
    sensitivity / (1.0 - specificity + epsilon)
}

/// Posterior percentage under the default model.
pub fn compute_likelihood(result: &DiagnosticResult) -> Option<f64> {
    LikelihoodModel::DEFAULT.posterior(result)
}
