//! Core types for likelihood scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use realdiag_core::constants::{
    COLOR_HIGH, COLOR_LOW, COLOR_MODERATE, COLOR_UNKNOWN, COLOR_VERY_HIGH, COLOR_VERY_LOW,
    DEFAULT_BAND_THRESHOLDS,
};

/// Graduated confidence bands over the posterior percentage.
///
/// Label and color both come from the same band, so they always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceBand {
    /// Posterior absent or NaN.
    Unknown,
    /// posterior < 20.
    VeryLow,
    /// posterior ≥ 20.
    Low,
    /// posterior ≥ 40.
    Moderate,
    /// posterior ≥ 60.
    High,
    /// posterior ≥ 80.
    VeryHigh,
}

impl ConfidenceBand {
    /// All bands, in index order.
    pub const ALL: [ConfidenceBand; 6] = [
        Self::Unknown,
        Self::VeryLow,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
    ];

    /// Classify a posterior with the default thresholds.
    pub fn from_posterior(posterior: Option<f64>) -> Self {
        Self::classify(posterior, &DEFAULT_BAND_THRESHOLDS)
    }

    /// Classify a posterior against `[very_high, high, moderate, low]` lower bounds.
    ///
    /// Bounds are inclusive and checked top-down, so the first match wins.
    pub fn classify(posterior: Option<f64>, thresholds: &[f64; 4]) -> Self {
        let Some(p) = posterior.filter(|p| !p.is_nan()) else {
            return Self::Unknown;
        };
        let [very_high, high, moderate, low] = *thresholds;
        if p >= very_high {
            Self::VeryHigh
        } else if p >= high {
            Self::High
        } else if p >= moderate {
            Self::Moderate
        } else if p >= low {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Position in [`ConfidenceBand::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable confidence label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Hex display color: gray for unknown, then red through green.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Unknown => COLOR_UNKNOWN,
            Self::VeryLow => COLOR_VERY_LOW,
            Self::Low => COLOR_LOW,
            Self::Moderate => COLOR_MODERATE,
            Self::High => COLOR_HIGH,
            Self::VeryHigh => COLOR_VERY_HIGH,
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidence label for a posterior percentage.
pub fn confidence_level(posterior: Option<f64>) -> &'static str {
    ConfidenceBand::from_posterior(posterior).label()
}

/// Display color for a posterior percentage.
pub fn confidence_color(posterior: Option<f64>) -> &'static str {
    ConfidenceBand::from_posterior(posterior).color()
}

/// Everything the results view needs for one candidate diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodOutcome {
    /// Diagnosis label, copied from the input.
    pub label: String,
    /// Posterior percentage in [0, cap], or `None` when it cannot be computed.
    pub posterior: Option<f64>,
    pub band: ConfidenceBand,
    pub confidence_level: String,
    pub confidence_color: String,
    /// Reasoning steps, in display order.
    pub trace: Vec<String>,
    /// Ranking key: the posterior, or the raw match score when the posterior is absent.
    pub effective_likelihood: f64,
    /// Number of matched presentations, used by what-if estimates.
    pub finding_count: usize,
}
