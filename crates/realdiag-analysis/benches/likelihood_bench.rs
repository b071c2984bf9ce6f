//! Likelihood engine benchmarks.
//!
//! Benchmarks: single evaluation and batch ranking at several list sizes.
//! Run with: cargo bench -p realdiag-analysis --bench likelihood_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use realdiag_analysis::likelihood::{rank_by_likelihood, LikelihoodScorer};
use realdiag_core::types::DiagnosticResult;

/// Build N results, every third one lacking test characteristics.
fn make_results(count: usize) -> Vec<DiagnosticResult> {
    (0..count)
        .map(|i| {
            let result = DiagnosticResult::new(format!("dx_{i:05}"), (i % 100) as f64 / 10.0)
                .with_presentations(["fever", "cough", "dyspnea"].iter().copied().take(i % 4));
            if i % 3 == 0 {
                result
            } else {
                let sensitivity = 0.5 + (i % 50) as f64 / 100.0;
                let specificity = 0.4 + (i % 60) as f64 / 100.0;
                result.with_test_characteristics(sensitivity, specificity)
            }
        })
        .collect()
}

fn evaluate_single(c: &mut Criterion) {
    let scorer = LikelihoodScorer::with_defaults();
    let result = DiagnosticResult::new("Migraine Headache", 8.5)
        .with_test_characteristics(0.92, 0.88)
        .with_presentations(["headache", "photophobia", "nausea"]);

    c.bench_function("evaluate_single", |b| {
        b.iter(|| scorer.evaluate(black_box(&result)));
    });
}

fn rank_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let scorer = LikelihoodScorer::with_defaults();

    for size in [100, 1_000, 10_000] {
        let results = make_results(size);

        group.bench_with_input(BenchmarkId::new("score_batch", size), &size, |b, _| {
            b.iter(|| scorer.score_batch(black_box(&results)));
        });

        group.bench_with_input(BenchmarkId::new("rank_in_place", size), &size, |b, _| {
            b.iter(|| {
                let mut copy = results.clone();
                rank_by_likelihood(&mut copy);
                copy
            });
        });
    }
    group.finish();
}

criterion_group!(benches, evaluate_single, rank_batches);
criterion_main!(benches);
