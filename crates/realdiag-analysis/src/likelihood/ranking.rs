//! Ranking candidates by effective likelihood.

use std::cmp::Ordering;

use realdiag_core::types::{truthy, DiagnosticResult};

use super::bayes::LikelihoodModel;

/// Posterior when available and truthy, otherwise the raw match score.
pub fn effective_likelihood(model: &LikelihoodModel, result: &DiagnosticResult) -> f64 {
    truthy(model.posterior(result)).unwrap_or(result.match_score)
}

/// Descending comparator on effective likelihood (higher first).
pub fn compare_by_likelihood(a: &DiagnosticResult, b: &DiagnosticResult) -> Ordering {
    let model = LikelihoodModel::DEFAULT;
    compare_keys(
        effective_likelihood(&model, a),
        effective_likelihood(&model, b),
    )
}

/// Sort `results` in place, most likely first. Ties keep their input order.
pub fn rank_by_likelihood(results: &mut [DiagnosticResult]) {
    results.sort_by(compare_by_likelihood);
}

/// Descending total order over ranking keys. NaN sorts last.
pub(crate) fn compare_keys(a: f64, b: f64) -> Ordering {
    sort_key(b).total_cmp(&sort_key(a))
}

fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        // -0.0 + 0.0 == +0.0, so both zeros compare equal under total_cmp.
        value + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_posterior_first() {
        let strong = DiagnosticResult::new("strong", 9.0).with_test_characteristics(0.95, 0.95);
        let weak = DiagnosticResult::new("weak", 9.0).with_test_characteristics(0.6, 0.5);
        assert_eq!(compare_by_likelihood(&strong, &weak), Ordering::Less);
        assert_eq!(compare_by_likelihood(&weak, &strong), Ordering::Greater);
    }

    #[test]
    fn test_falls_back_to_match_score() {
        let model = LikelihoodModel::DEFAULT;
        let bare = DiagnosticResult::new("bare", 7.5);
        assert_eq!(effective_likelihood(&model, &bare), 7.5);

        // A zero posterior is falsy and also falls back.
        let zero = DiagnosticResult::new("zero", 0.0).with_test_characteristics(0.9, 0.9);
        assert_eq!(effective_likelihood(&model, &zero), 0.0);
    }

    #[test]
    fn test_rank_mixed_set() {
        let mut results = vec![
            DiagnosticResult::new("bare", 6.0),
            DiagnosticResult::new("migraine", 8.5).with_test_characteristics(0.92, 0.88),
            DiagnosticResult::new("tension", 5.0).with_test_characteristics(0.7, 0.6),
        ];
        rank_by_likelihood(&mut results);
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        // migraine ≈ 41.8, tension ≈ 8.8, bare falls back to 6.0
        assert_eq!(labels, vec!["migraine", "tension", "bare"]);
    }

    #[test]
    fn test_ties_are_stable() {
        let mut results = vec![
            DiagnosticResult::new("first", 4.0),
            DiagnosticResult::new("second", 4.0),
            DiagnosticResult::new("third", 4.0),
        ];
        rank_by_likelihood(&mut results);
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        assert_eq!(compare_keys(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(compare_keys(1.0, f64::NAN), Ordering::Less);
        assert_eq!(compare_keys(-0.0, 0.0), Ordering::Equal);
    }
}
