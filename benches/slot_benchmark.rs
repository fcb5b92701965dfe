use alcove::Slot;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("Slot vs Option access");

    let option = Some(42u64);
    group.bench_function("Option::as_ref", |b| {
        b.iter(|| black_box(black_box(&option).as_ref()))
    });

    let slot = Slot::new(42u64);
    group.bench_function("Slot::get", |b| {
        b.iter(|| black_box(black_box(&slot).get()))
    });

    group.bench_function("Slot::value (checked)", |b| {
        b.iter(|| black_box(black_box(&slot).value()))
    });

    group.bench_function("Slot::value_unchecked", |b| {
        b.iter(|| {
            // SAFETY: the slot above is engaged for the whole benchmark.
            black_box(unsafe { black_box(&slot).value_unchecked() })
        })
    });

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Slot vs Option churn");

    group.bench_function("Option set/clear", |b| {
        b.iter_batched(
            || None,
            |mut option: Option<u64>| {
                option = Some(black_box(7));
                black_box(&option);
                option = None;
                black_box(option)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Slot set/reset", |b| {
        b.iter_batched(
            Slot::empty,
            |mut slot: Slot<u64>| {
                slot.set(black_box(7));
                black_box(&slot);
                slot.reset();
                slot
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Slot replace", |b| {
        b.iter_batched(
            || Slot::new(1u64),
            |mut slot| {
                let prior = slot.replace(black_box(2));
                black_box(prior);
                slot
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_access, bench_churn);
criterion_main!(benches);
