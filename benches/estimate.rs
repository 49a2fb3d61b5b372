use criterion::{black_box, criterion_group, criterion_main, Criterion};
use land_value_estimator::{compute_estimate, project, Factors, Inputs, Region};

fn bench_estimate(c: &mut Criterion) {
    let inputs = Inputs::new("Meadow Lane", Region::Urban, 0.5);
    let factors = Factors {
        soil: 1.2,
        access: 1.15,
        utilities: 1.2,
        zoning: 1.3,
    };

    c.bench_function("compute_estimate", |b| {
        b.iter(|| compute_estimate(black_box(&inputs), black_box(&factors)))
    });

    c.bench_function("project_summary", |b| {
        b.iter(|| project(black_box(&inputs), black_box(&factors)))
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
