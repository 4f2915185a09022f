//! Criterion benchmark: hand-rolled functional primitives vs native iterators,
//! plus the merge sort itself; run with: cargo bench --bench primitives

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use riffle::merge_sort;
use riffle::primitives::{sum_even_successors, sum_even_successors_native};

// Large enough that allocation of intermediate sequences dominates, small
// enough to keep a bench iteration under a few milliseconds.
const JOB_N: i64 = 100_000;

fn generate_random_array(size: usize, seed: i64) -> Vec<i64> {
    let mut arr = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state = (state.wrapping_mul(1103515245).wrapping_add(12345)) % 2147483648;
        arr.push(state % 1000000);
    }
    arr
}

fn bench_jobs(c: &mut Criterion) {
    let mut group = c.benchmark_group("even_successor_sum");

    group.bench_function("hand_rolled", |b| {
        b.iter(|| sum_even_successors(black_box(JOB_N)))
    });
    group.bench_function("native", |b| {
        b.iter(|| sum_even_successors_native(black_box(JOB_N)))
    });

    group.finish();
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for size in [1_000usize, 100_000] {
        let arr = generate_random_array(size, 42);
        group.bench_function(format!("random_{size}"), |b| {
            b.iter(|| merge_sort(black_box(arr.clone())))
        });
    }

    let sorted = (0..100_000i64).collect::<Vec<_>>();
    group.bench_function("presorted_100000", |b| {
        b.iter(|| merge_sort(black_box(sorted.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_jobs, bench_merge_sort);
criterion_main!(benches);
