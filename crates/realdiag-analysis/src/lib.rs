//! Likelihood engine for RealDiag.
//!
//! Turns the candidates returned by the diagnostic API into posterior
//! probabilities, confidence bands, and step-by-step reasoning traces.

pub mod likelihood;

pub use likelihood::{
    compare_by_likelihood, compute_likelihood, confidence_color, confidence_level,
    generate_trace, rank_by_likelihood, what_if_impact, ConfidenceBand, LikelihoodModel,
    LikelihoodOutcome, LikelihoodScorer,
};
