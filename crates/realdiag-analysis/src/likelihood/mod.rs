//! Bayesian likelihood scoring.
//!
//! Positive likelihood ratio from sensitivity/specificity, a fixed prior,
//! and the rule engine's match ratio combine into a posterior percentage.
//! Every operation here is a pure function of its inputs.

pub mod bayes;
pub mod fixed;
pub mod ranking;
pub mod scorer;
pub mod trace;
pub mod types;
pub mod what_if;

pub use bayes::{compute_likelihood, positive_likelihood_ratio, LikelihoodModel};
pub use fixed::to_fixed;
pub use ranking::{compare_by_likelihood, effective_likelihood, rank_by_likelihood};
pub use scorer::LikelihoodScorer;
pub use trace::generate_trace;
pub use types::{confidence_color, confidence_level, ConfidenceBand, LikelihoodOutcome};
pub use what_if::what_if_impact;
