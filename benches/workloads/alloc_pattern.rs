use ballast::strategy;
use criterion::{black_box, Criterion};

pub fn run(c: &mut Criterion) {
    bench_strategies(c);
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("suite_alloc_pattern");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);

    const N: usize = 10_000;

    group.bench_function("heap_objects_10k", |b| {
        b.iter(|| black_box(strategy::heap_objects(N)))
    });

    group.bench_function("record_objects_10k", |b| {
        b.iter(|| black_box(strategy::record_objects(N)))
    });

    group.bench_function("inline_array_10k", |b| {
        b.iter(|| black_box(strategy::inline_array(N)))
    });

    group.bench_function("boxed_trait_objects_10k", |b| {
        b.iter(|| black_box(strategy::boxed_trait_objects(N)))
    });

    group.bench_function("boxed_any_objects_10k", |b| {
        b.iter(|| black_box(strategy::boxed_any_objects(N)))
    });

    group.finish();
}
