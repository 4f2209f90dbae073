use criterion::{black_box, criterion_group, criterion_main, Criterion};
use veltherm_estimator::generator::generate_gas_trace;

pub fn generate_gas_1000_bench(c: &mut Criterion) {
    c.bench_function("generate gas 1000", |b| {
        b.iter(|| generate_gas_trace(black_box(1000), 128, 273.15, "Argon", 66.335))
    });
}

pub fn generate_gas_8000_bench(c: &mut Criterion) {
    c.bench_function("generate gas 8000", |b| {
        b.iter(|| generate_gas_trace(black_box(8000), 128, 273.15, "Argon", 66.335))
    });
}

criterion_group!(
    generator_benches,
    generate_gas_1000_bench,
    generate_gas_8000_bench
);
criterion_main!(generator_benches);
