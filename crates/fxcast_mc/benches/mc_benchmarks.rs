//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - GBM path generation at varying path/step counts
//! - Prediction and VaR reduction over the terminal column

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fxcast_core::SimulationParameters;
use fxcast_mc::{generate_paths, prediction_summary, value_at_risk, ForecastRng};

/// Benchmark GBM path generation.
fn bench_generate_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_paths");
    let params = SimulationParameters::default();

    for (n_simulations, days) in [(1_000, 30), (5_000, 30), (1_000, 252), (10_000, 30)] {
        let label = format!("{}paths_{}days", n_simulations, days);
        group.bench_with_input(
            BenchmarkId::new("gbm", &label),
            &(n_simulations, days),
            |b, &(n_simulations, days)| {
                b.iter(|| {
                    let mut rng = ForecastRng::from_seed(42);
                    generate_paths(black_box(&params), days, n_simulations, &mut rng).unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the prediction and VaR reducers over a fixed terminal column.
fn bench_reducers(c: &mut Criterion) {
    let params = SimulationParameters::default();
    let mut rng = ForecastRng::from_seed(42);
    let paths = generate_paths(&params, 30, 10_000, &mut rng).unwrap();
    let terminal = paths.terminal_rates();

    let mut group = c.benchmark_group("reducers");

    group.bench_function("prediction_summary_10k", |b| {
        b.iter(|| prediction_summary(black_box(&terminal), 0.95).unwrap());
    });

    group.bench_function("value_at_risk_10k", |b| {
        b.iter(|| value_at_risk(black_box(&terminal), 75.0, 0.95, 10_000.0).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_generate_paths, bench_reducers);
criterion_main!(benches);
