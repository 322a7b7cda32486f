use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_benchmarks::Registry;
use ndarray::Array1;

fn bench_evaluators(c: &mut Criterion) {
    let registry = Registry::global();

    for name in ["sphere", "rosenbrock", "ackley", "griewank"] {
        let record = registry.lookup(name).unwrap();
        let n = 10;
        let x = Array1::from_vec(record.metadata().start(n).unwrap());

        c.bench_function(&format!("{name}_value_10d"), |b| {
            let f = record.value_fn();
            b.iter(|| f(black_box(&x)))
        });

        c.bench_function(&format!("{name}_gradient_into_10d"), |b| {
            let g = record.gradient_into_fn();
            let mut out = Array1::zeros(n);
            b.iter(|| g(black_box(&x), &mut out))
        });
    }
}

criterion_group!(benches, bench_evaluators);
criterion_main!(benches);
