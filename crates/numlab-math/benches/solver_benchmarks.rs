//! Benchmarks for the linear solvers and root finders.
//!
//! Run with: cargo bench -p numlab-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use numlab_math::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Diagonally dominant `n x n` system with deterministic entries.
fn create_system(n: usize) -> (Matrix, Vector) {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        n as f64 + 1.0
                    } else {
                        ((i * 7 + j * 3) % 11) as f64 / 11.0 - 0.5
                    }
                })
                .collect()
        })
        .collect();
    let b: Vec<f64> = (0..n).map(|i| (i % 5) as f64 - 2.0).collect();

    (
        Matrix::from_rows(&rows).expect("rectangular rows"),
        Vector::new(b),
    )
}

fn create_function() -> ScalarFunction {
    ScalarFunction::new(
        |x: f64| x.exp() - 2.0 * (x - 2.0).powi(2),
        |x: f64| x.exp() - 4.0 * (x - 2.0),
        |x: f64| x.exp() - 4.0,
        Interval::new(0.0, 1.0).expect("valid interval"),
        1e-10,
    )
    .expect("valid function")
}

// =============================================================================
// LINEAR SOLVERS
// =============================================================================

fn bench_gauss(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_elimination");
    let config = GaussConfig::default();

    for n in [4, 16, 64] {
        let (a, b) = create_system(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| gaussian_elimination(black_box(&a), black_box(&b), &config))
        });
    }

    group.finish();
}

fn bench_seidel(c: &mut Criterion) {
    let mut group = c.benchmark_group("seidel");
    let config = SeidelConfig::default().with_tolerance(1e-12);

    for n in [4, 16, 64] {
        let (a, b) = create_system(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| seidel(black_box(&a), black_box(&b), &config))
        });
    }

    group.finish();
}

// =============================================================================
// ROOT FINDERS
// =============================================================================

fn bench_root_finders(c: &mut Criterion) {
    let mut group = c.benchmark_group("root_finders");
    let func = create_function();
    let config = RootConfig::default();

    for method in Method::ALL {
        group.bench_function(method.name(), |bench| {
            bench.iter(|| method.run(black_box(&func), &config))
        });
    }

    group.finish();
}

fn bench_solve_all(c: &mut Criterion) {
    let func = create_function();
    let config = RootConfig::default();

    c.bench_function("solve_all_with_error_bounds", |bench| {
        bench.iter(|| solve_all(black_box(&func), &config))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(linear, bench_gauss, bench_seidel);

criterion_group!(roots, bench_root_finders, bench_solve_all);

criterion_main!(linear, roots);
