use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use props2json::{build, to_document, Options};

fn flat_pairs(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|i| (format!("key{}", i), format!("{}", i)))
        .collect()
}

fn dotted_pairs(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|i| {
            (
                format!("group{}.section{}.key{}", i % 8, i % 32, i),
                format!("{}", i),
            )
        })
        .collect()
}

fn benchmark_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_flat");

    for size in [10, 100, 1000].iter() {
        let pairs = flat_pairs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| build(black_box(pairs.clone()), &Options::new()))
        });
    }
    group.finish();
}

fn benchmark_hierarchical(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_hierarchical");
    let options = Options::new().with_hierarchical(true);

    for size in [10, 100, 1000].iter() {
        let pairs = dotted_pairs(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| build(black_box(pairs.clone()), &options))
        });
    }
    group.finish();
}

fn benchmark_typed_vs_raw(c: &mut Criterion) {
    let pairs: Vec<(String, String)> = (0..500)
        .map(|i| {
            let value = match i % 4 {
                0 => "true".to_string(),
                1 => format!("{}", i),
                2 => format!("{}.5", i),
                _ => format!("label-{}", i),
            };
            (format!("key{}", i), value)
        })
        .collect();

    let mut group = c.benchmark_group("scalar_typing");

    group.bench_function("typed", |b| {
        b.iter(|| build(black_box(pairs.clone()), &Options::new()))
    });

    let raw = Options::new().with_raw_data(true);
    group.bench_function("raw", |b| {
        b.iter(|| build(black_box(pairs.clone()), &raw))
    });

    group.finish();
}

fn benchmark_to_json(c: &mut Criterion) {
    let pairs = dotted_pairs(500);
    let options = Options::new().with_hierarchical(true);
    let document = to_document(pairs, &options);

    c.bench_function("serialize_document_to_json", |b| {
        b.iter(|| serde_json::to_string(black_box(&document)))
    });
}

criterion_group!(
    benches,
    benchmark_flat,
    benchmark_hierarchical,
    benchmark_typed_vs_raw,
    benchmark_to_json
);
criterion_main!(benches);
