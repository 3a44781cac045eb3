use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pocket_ledger::ledger::{Ledger, Taxonomy};

const CATEGORIES: [&str; 7] = ["meal", "snack", "drink", "bus", "railway", "salary", "bonus"];

fn batch_text(count: usize) -> String {
    (0..count)
        .map(|idx| {
            let category = CATEGORIES[idx % CATEGORIES.len()];
            format!("{category} item{idx} {}", (idx % 200) as i64 - 100)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn build_sample_ledger(count: usize, taxonomy: &Taxonomy) -> Ledger {
    let mut ledger = Ledger::new(0);
    ledger.add_batch(&batch_text(count), taxonomy);
    ledger
}

fn bench_add_batch(c: &mut Criterion) {
    let taxonomy = Taxonomy::reference();
    let text = batch_text(1_000);
    c.bench_function("add_batch_1k", |b| {
        b.iter_batched(
            || Ledger::new(0),
            |mut ledger| {
                black_box(ledger.add_batch(&text, &taxonomy));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find(c: &mut Criterion) {
    let taxonomy = Taxonomy::reference();
    let ledger = build_sample_ledger(10_000, &taxonomy);
    c.bench_function("find_expense_10k", |b| {
        b.iter(|| black_box(ledger.find(black_box("expense"), &taxonomy).unwrap()))
    });
}

fn bench_roundtrip(c: &mut Criterion) {
    let taxonomy = Taxonomy::reference();
    let ledger = build_sample_ledger(10_000, &taxonomy);
    c.bench_function("serialize_deserialize_10k", |b| {
        b.iter(|| black_box(Ledger::deserialize(ledger.serialize())))
    });
}

criterion_group!(benches, bench_add_batch, bench_find, bench_roundtrip);
criterion_main!(benches);
