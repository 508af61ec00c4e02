use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shelf_core::ItemId;
use shelf_inventory::{InMemoryItemStore, ItemStore, NewItem};

fn seeded_store(n: usize) -> InMemoryItemStore {
    let store = InMemoryItemStore::new();
    for i in 0..n {
        store.create(NewItem::new(format!("item-{i}"), 10.0).with_tax(0.2));
    }
    store
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_store_create");
    group.throughput(Throughput::Elements(1));

    let store = InMemoryItemStore::new();
    group.bench_function("create_taxed", |b| {
        b.iter(|| store.create(black_box(NewItem::new("Widget", 9.99).with_tax(0.08))))
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_store_reads");

    for size in [10usize, 1_000, 10_000].iter() {
        let store = seeded_store(*size);
        let probe = ItemId::new((*size as i64) / 2 + 1);

        group.bench_with_input(BenchmarkId::new("get", size), size, |b, _| {
            b.iter(|| store.get(black_box(probe)))
        });

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, _| {
            b.iter(|| store.list())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_create, bench_reads);
criterion_main!(benches);
