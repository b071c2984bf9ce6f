//! Property-based tests for the likelihood engine.

use proptest::prelude::*;
use realdiag_analysis::likelihood::*;
use realdiag_core::types::DiagnosticResult;

fn arb_result() -> impl Strategy<Value = DiagnosticResult> {
    (
        "[A-Za-z ]{1,20}",
        0.0f64..10.0,
        prop::option::of(0.0f64..=1.0),
        prop::option::of(0.0f64..=1.0),
        prop::collection::vec("[a-z]{3,10}", 0..6),
    )
        .prop_map(|(label, score, sensitivity, specificity, presentations)| {
            let mut result = DiagnosticResult::new(label, score).with_presentations(presentations);
            result.sensitivity = sensitivity;
            result.specificity = specificity;
            result
        })
}

// ── Posterior is bounded ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn posterior_within_bounds(
        score in 0.0f64..=10.0,
        sensitivity in 0.001f64..=1.0,
        specificity in 0.001f64..=1.0,
    ) {
        let result = DiagnosticResult::new("p", score)
            .with_test_characteristics(sensitivity, specificity);
        let posterior = compute_likelihood(&result).unwrap();
        prop_assert!(posterior >= 0.0, "negative posterior {}", posterior);
        prop_assert!(posterior <= 99.0, "posterior {} above cap", posterior);
    }
}

// ── Level and color always come from the same band ───────────────────────

proptest! {
    #[test]
    fn level_and_color_agree(posterior in prop::option::of(-10.0f64..110.0)) {
        let band = ConfidenceBand::from_posterior(posterior);
        let level_index = ConfidenceBand::ALL.iter().position(|b| b.label() == confidence_level(posterior));
        let color_index = ConfidenceBand::ALL.iter().position(|b| b.color() == confidence_color(posterior));
        prop_assert_eq!(level_index, Some(band.index()));
        prop_assert_eq!(color_index, Some(band.index()));
    }
}

// ── Bands are monotone in the posterior ──────────────────────────────────

proptest! {
    #[test]
    fn bands_monotone(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceBand::from_posterior(Some(lo)) <= ConfidenceBand::from_posterior(Some(hi)));
    }
}

// ── Pure function ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn evaluation_is_idempotent(result in arb_result()) {
        let scorer = LikelihoodScorer::with_defaults();
        let first = scorer.evaluate(&result);
        let second = scorer.evaluate(&result);
        prop_assert_eq!(
            first.posterior.map(f64::to_bits),
            second.posterior.map(f64::to_bits)
        );
        prop_assert_eq!(first, second);
    }
}

// ── Ranking is non-increasing ────────────────────────────────────────────

proptest! {
    #[test]
    fn ranking_non_increasing(mut results in prop::collection::vec(arb_result(), 0..20)) {
        rank_by_likelihood(&mut results);
        let model = LikelihoodModel::DEFAULT;
        let keys: Vec<f64> = results.iter().map(|r| effective_likelihood(&model, r)).collect();
        for w in keys.windows(2) {
            prop_assert!(w[0] >= w[1], "ranking out of order: {:?}", keys);
        }
    }

    #[test]
    fn batch_matches_in_place_ranking(results in prop::collection::vec(arb_result(), 0..20)) {
        let outcomes = LikelihoodScorer::with_defaults().score_batch(&results);
        let mut ranked = results.clone();
        rank_by_likelihood(&mut ranked);
        let batch_labels: Vec<&str> = outcomes.iter().map(|o| o.label.as_str()).collect();
        let ranked_labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        prop_assert_eq!(batch_labels, ranked_labels);
    }
}

// ── What-if is bounded by the current likelihood ─────────────────────────

proptest! {
    #[test]
    fn what_if_bounded(
        current in 0.01f64..99.0,
        total in 1usize..20,
        removed in 0usize..40,
    ) {
        let impact = what_if_impact(Some(current), total, removed);
        prop_assert!(impact >= 0.0);
        prop_assert!(impact <= current);
        if removed >= total {
            prop_assert!((impact - current).abs() < 1e-9);
        }
    }
}

// ── Trace shape ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn trace_starts_with_match_score(result in arb_result()) {
        let posterior = compute_likelihood(&result);
        let trace = generate_trace(&result, posterior);
        prop_assert!(trace[0].starts_with("Initial match score: "));
        let expected_len = 1
            + if result.matched_presentations.is_empty() { 0 } else { 1 + result.matched_presentations.len() }
            + if result.test_characteristics().is_some() { 2 } else { 0 }
            + usize::from(posterior.is_some());
        prop_assert_eq!(trace.len(), expected_len);
    }
}

// ── Fixed-point rendering stays within half a unit ───────────────────────

proptest! {
    #[test]
    fn to_fixed_within_half_unit(value in -1000.0f64..1000.0, digits in 0usize..=3) {
        let rendered = to_fixed(value, digits);
        let parsed: f64 = rendered.parse().unwrap();
        let half_unit = 0.5 * 10f64.powi(-(digits as i32));
        prop_assert!((parsed - value).abs() <= half_unit + 1e-9, "{} -> {}", value, rendered);
        let fraction_len = rendered.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction_len, digits);
    }
}
