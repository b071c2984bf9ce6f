//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BAND_THRESHOLDS, DEFAULT_BASE_PROBABILITY, DEFAULT_LR_EPSILON,
    DEFAULT_MATCH_SCORE_SCALE, DEFAULT_POSTERIOR_CAP,
};

/// Parameters of the Bayesian likelihood model.
///
/// Unset fields resolve to the compiled defaults in [`crate::constants`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Prior probability of the diagnosis. Default: 0.1.
    pub base_probability: Option<f64>,
    /// Epsilon added to `1 - specificity`. Default: 0.001.
    pub lr_epsilon: Option<f64>,
    /// Cap on the posterior percentage. Default: 99.
    pub posterior_cap: Option<f64>,
    /// Match score divisor. Default: 10.
    pub match_score_scale: Option<f64>,
    /// Inclusive lower bounds of Very High, High, Moderate, Low. Default: [80, 60, 40, 20].
    pub band_thresholds: Option<[f64; 4]>,
}

impl ScoringConfig {
    pub fn effective_base_probability(&self) -> f64 {
        self.base_probability.unwrap_or(DEFAULT_BASE_PROBABILITY)
    }

    pub fn effective_lr_epsilon(&self) -> f64 {
        self.lr_epsilon.unwrap_or(DEFAULT_LR_EPSILON)
    }

    pub fn effective_posterior_cap(&self) -> f64 {
        self.posterior_cap.unwrap_or(DEFAULT_POSTERIOR_CAP)
    }

    pub fn effective_match_score_scale(&self) -> f64 {
        self.match_score_scale.unwrap_or(DEFAULT_MATCH_SCORE_SCALE)
    }

    pub fn effective_band_thresholds(&self) -> [f64; 4] {
        self.band_thresholds.unwrap_or(DEFAULT_BAND_THRESHOLDS)
    }
}
