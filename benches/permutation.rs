//! Permutation test throughput.
//!
//! ```bash
//! cargo bench --bench permutation
//! cargo bench --bench permutation --features parallel
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_fuzzy::{PermutationConfig, PermutationTest, TrapezoidalNumber};

/// Ambiguity-like samples with a shifted mean.
fn samples(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x = (0..n).map(|i| 4.0 + (i % 7) as f64 * 0.5).collect();
    let y = (0..n).map(|i| 5.0 + (i % 5) as f64 * 0.75).collect();
    (x, y)
}

fn bench_independent(c: &mut Criterion) {
    let mut group = c.benchmark_group("independent");
    let test = PermutationTest::new(PermutationConfig::new().seed(42));
    for n in [20, 200, 2_000] {
        let (x, y) = samples(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| test.independent(black_box(&x), black_box(&y)))
        });
    }
    group.finish();
}

fn bench_dependent(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependent");
    let test = PermutationTest::new(PermutationConfig::new().seed(42));
    for n in [20, 200, 2_000] {
        let (x, y) = samples(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| test.dependent(black_box(&x), black_box(&y)))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let pairs = [
        ("restricted", [1.0, 2.0, 3.0, 4.0], [2.0, 3.0, 4.0, 5.0]),
        ("semi_restricted", [-5.0, -4.0, -3.0, -2.0], [-2.0, -1.0, 0.0, 1.0]),
        ("near_zero", [-4.0, -2.0, 1.0, 3.0], [-1.0, -1.0, 2.0, 3.0]),
    ];
    let mut group = c.benchmark_group("multiply");
    for (name, a, b) in pairs {
        let (Ok(a), Ok(b)) = (
            TrapezoidalNumber::try_from(a),
            TrapezoidalNumber::try_from(b),
        ) else {
            continue;
        };
        group.bench_function(name, |bench| bench.iter(|| black_box(a) * black_box(b)));
    }
    group.finish();
}

criterion_group!(benches, bench_independent, bench_dependent, bench_multiply);
criterion_main!(benches);
