//! Benchmarks for plancast_engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use plancast_core::{Baseline, NoiseSpec, ParameterSet, Scenario};
use plancast_engine::projector::project;
use plancast_engine::{MonteCarloDriver, SimulationConfig};

fn bench_scenario() -> Scenario {
    Scenario::new(
        "premium",
        "Premium Line",
        Baseline::per_unit(2018, 13_403.0, 400.0),
        ParameterSet::new()
            .with_sales_growth(0.04)
            .with_unit_sales_growth(0.02)
            .with_price_growth(0.0)
            .with_cogs_percent(0.46)
            .with_commission_rate(0.05)
            .with_ga_percent(0.23),
    )
    .with_noise(
        NoiseSpec::none()
            .with_unit_sales_growth(0.01)
            .with_price_growth(0.01)
            .with_cogs_percent(0.01)
            .with_commission_rate(0.005)
            .with_ga_percent(0.01),
    )
}

fn benchmark_projection(c: &mut Criterion) {
    let scenario = bench_scenario();

    c.bench_function("project_3_periods", |b| {
        b.iter(|| {
            project(
                black_box(&scenario.baseline),
                black_box(&scenario.assumptions),
                3,
            )
        })
    });
}

fn benchmark_cumulative_simulation(c: &mut Criterion) {
    let scenario = bench_scenario();
    let mut group = c.benchmark_group("cumulative_simulation");

    for iterations in [1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    let config = SimulationConfig::builder()
                        .iterations(iterations)
                        .seed(42)
                        .build()
                        .unwrap();
                    let mut driver = MonteCarloDriver::new(config).unwrap();
                    driver.run_cumulative(black_box(&scenario)).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn benchmark_parallel_simulation(c: &mut Criterion) {
    let scenario = bench_scenario();
    let config = SimulationConfig::builder()
        .iterations(10_000)
        .seed(42)
        .build()
        .unwrap();
    let driver = MonteCarloDriver::new(config).unwrap();

    c.bench_function("parallel_simulation_10k", |b| {
        b.iter(|| driver.run_cumulative_par(black_box(&scenario)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_projection,
    benchmark_cumulative_simulation,
    benchmark_parallel_simulation
);
criterion_main!(benches);
