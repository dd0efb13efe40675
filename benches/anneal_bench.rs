//! Criterion benchmarks for the annealing loop and tour evaluation.
//!
//! Uses random symmetric matrices so timings measure the search itself
//! rather than any particular instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::distance::DistanceMatrix;
use tsp_anneal::sa::{AnnealingConfig, AnnealingOptimizer};
use tsp_anneal::tour::tour_cost;

// ===========================================================================
// Random symmetric instance
// ===========================================================================

fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.random_range(1.0..100.0);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    DistanceMatrix::from_rows(&rows).expect("square")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_tour_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_cost");

    for &n in &[10usize, 100, 1000] {
        let matrix = random_matrix(n, 1);
        let tour: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, tour), |b, (m, t)| {
            b.iter(|| black_box(tour_cost(black_box(m), black_box(t))))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &n in &[10usize, 50, 100] {
        let matrix = random_matrix(n, 42);
        let config = AnnealingConfig::default()
            .with_initial_temperature(1000.0)
            .with_cooling_rate(0.999)
            .with_stopping_temperature(0.01)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let mut optimizer = AnnealingOptimizer::new(c.clone()).expect("valid config");
                optimizer.load(m.clone());
                black_box(optimizer.run().expect("loaded"))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tour_cost, bench_anneal);
criterion_main!(benches);
