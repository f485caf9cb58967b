use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wsc_plabic::{extend_to_collection, frozen_labels, rectangle_collection};

fn build_collection_bench(c: &mut Criterion) {
    c.bench_function("rectangle_4_9_with_faces", |b| {
        b.iter(|| {
            let collection = rectangle_collection(4, 9, true).unwrap();
            black_box(collection);
        });
    });

    c.bench_function("rectangle_5_12_adjacency_only", |b| {
        b.iter(|| {
            let collection = rectangle_collection(5, 12, false).unwrap();
            black_box(collection);
        });
    });

    c.bench_function("extend_frozen_4_9", |b| {
        let frozen = frozen_labels(4, 9).unwrap();
        b.iter(|| {
            let collection = extend_to_collection(4, 9, &frozen).unwrap();
            black_box(collection);
        });
    });
}

criterion_group!(benches, build_collection_bench);
criterion_main!(benches);
