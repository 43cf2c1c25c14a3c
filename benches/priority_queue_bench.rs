use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use semcoll::{NaturalOrder, PriorityQueue, ReverseOrder};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_offer_pop_100k(c: &mut Criterion) {
    c.bench_function("priority_queue::offer_100k", |b| {
        b.iter_batched(
            PriorityQueue::<u64>::new,
            |mut q| {
                for x in lcg(1).take(100_000) {
                    q.offer(x);
                }
                black_box(q)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("priority_queue::pop_all_100k", |b| {
        b.iter_batched(
            || lcg(2).take(100_000).collect::<PriorityQueue<u64>>(),
            |mut q| {
                while let Ok(x) = q.pop() {
                    black_box(x);
                }
                black_box(q)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("priority_queue::max_offer_pop_interleaved_100k", |b| {
        b.iter_batched(
            || PriorityQueue::with_comparator(ReverseOrder(NaturalOrder)),
            |mut q| {
                for (i, x) in lcg(3).take(100_000).enumerate() {
                    q.offer(x);
                    if i % 3 == 2 {
                        black_box(q.pop().ok());
                    }
                }
                black_box(q)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_remove_by_value_1k(c: &mut Criterion) {
    c.bench_function("priority_queue::remove_1k_of_20k", |b| {
        b.iter_batched(
            || {
                let values: Vec<u64> = lcg(5).take(20_000).collect();
                let targets: Vec<u64> = values.iter().step_by(20).copied().collect();
                (values.into_iter().collect::<PriorityQueue<u64>>(), targets)
            },
            |(mut q, targets)| {
                for t in &targets {
                    let _ = q.remove(t);
                }
                black_box(q)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iter_snapshot_10k(c: &mut Criterion) {
    c.bench_function("priority_queue::iter_sorted_10k", |b| {
        let q: PriorityQueue<u64> = lcg(7).take(10_000).collect();
        b.iter(|| {
            let mut sum = 0u64;
            for v in q.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_heap;
    config = bench_config();
    targets = bench_offer_pop_100k, bench_remove_by_value_1k, bench_iter_snapshot_10k
}

criterion_main!(benches_heap);
