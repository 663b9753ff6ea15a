use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use entity_merge::{
    find_keys_with_different_values, find_keys_with_same_values, format_haystack_json,
    resolve_duplicated_keys, Entity, ValueRecord,
};

fn make_entity(source: &str, keys: usize, offset: i64) -> Entity {
    (0..keys)
        .map(|i| {
            let val = i64::try_from(i).unwrap_or(i64::MAX) + offset * i64::from(i % 2 == 0);
            (format!("tag{i}"), ValueRecord::new(val).with_source(source))
        })
        .collect()
}

fn make_suffixed(keys: usize) -> Entity {
    (0..keys)
        .map(|i| {
            let val = i64::try_from(i).unwrap_or(i64::MAX);
            (format!("tag{i}_1"), ValueRecord::new(val).with_source("C"))
        })
        .collect()
}

fn bench_diff(c: &mut Criterion) {
    let a = make_entity("A", 256, 0);
    let b = make_entity("B", 256, 1);

    let mut group = c.benchmark_group("diff");
    group.throughput(Throughput::Elements(256));
    group.bench_function("same_values", |bench| {
        bench.iter(|| find_keys_with_same_values(black_box(&a), black_box(&b)));
    });
    group.bench_function("different_values", |bench| {
        bench.iter(|| find_keys_with_different_values(black_box(&a), black_box(&b)));
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let first = make_suffixed(256);
    let second = make_entity("B", 256, 1);

    let mut group = c.benchmark_group("duplicates");
    group.throughput(Throughput::Elements(256));
    group.bench_function("resolve_duplicated_keys", |bench| {
        bench.iter(|| {
            let mut incoming = second.clone();
            resolve_duplicated_keys(black_box(&first), &mut incoming).unwrap();
            incoming
        });
    });
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let entities: Vec<Entity> = (0..64).map(|_| make_entity("A", 32, 0)).collect();

    c.bench_function("format_haystack_json", |bench| {
        bench.iter(|| format_haystack_json(black_box(&entities)));
    });
}

criterion_group!(merge, bench_diff, bench_resolve, bench_format);
criterion_main!(merge);
