// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast store operations.
//!
//! Measures the performance of:
//! - Adding toasts (id generation, reducer, timer arming)
//! - Firing expired timers across a full store
//! - Pruning dismissed toasts

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hazard_watch::notifications::{ToastProps, ToastStore};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;

const STORE_SIZE: usize = 100;

fn filled_store(now: Instant) -> ToastStore {
    let mut store = ToastStore::default();
    for i in 0..STORE_SIZE {
        store.add_at(ToastProps::titled(format!("toast {i}")), now);
    }
    store
}

fn toast_store_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");

    group.bench_function("add_100", |b| {
        b.iter(|| black_box(filled_store(Instant::now())));
    });

    group.bench_function("expire_100", |b| {
        let start = Instant::now();
        b.iter_batched(
            || filled_store(start),
            |mut store| black_box(store.expire(start + Duration::from_secs(60))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("dismiss_all_then_prune", |b| {
        b.iter_batched(
            || filled_store(Instant::now()),
            |mut store| {
                store.dismiss(None);
                black_box(store.prune_dismissed())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, toast_store_benchmark);
criterion_main!(benches);
