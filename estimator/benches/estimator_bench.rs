use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veltherm_estimator::estimator::{estimate_rolling, EstimatorParameters};
use veltherm_estimator::generator::generate_gas_trace;

pub fn rolling_estimate_1000_bench(c: &mut Criterion) {
    let trace = generate_gas_trace(1000, 256, 273.15, "Argon", 66.335);
    let parameters = EstimatorParameters::new(128, 1, 66.335);
    c.bench_function("rolling estimate 1000", |b| {
        b.iter(|| {
            estimate_rolling(black_box(&trace), &parameters, 256).expect("Can't estimate")
        })
    });
}

pub fn rolling_estimate_8000_bench(c: &mut Criterion) {
    let trace = generate_gas_trace(8000, 256, 273.15, "Argon", 66.335);
    let parameters = EstimatorParameters::new(128, 1, 66.335);
    c.bench_function("rolling estimate 8000", |b| {
        b.iter(|| {
            estimate_rolling(black_box(&trace), &parameters, 256).expect("Can't estimate")
        })
    });
}

criterion_group!(
    estimator_benches,
    rolling_estimate_1000_bench,
    rolling_estimate_8000_bench
);
criterion_main!(estimator_benches);
