//! Benchmarks comparing nexus-heap against std's BinaryHeap.
//!
//! Run with: cargo bench --bench heap

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_heap::{Heap, Order};

const SIZES: [usize; 3] = [64, 1024, 16_384];

/// Deterministic scramble so both heaps see the same sequence.
fn priorities(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| (i * 7919 + 13) % n as u64).collect()
}

// ============================================================================
// Push then drain
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &n in &SIZES {
        let input = priorities(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("nexus_heap/min", n), &input, |b, input| {
            b.iter_with_setup(
                || Heap::new(n, Order::Min).unwrap(),
                |mut heap| {
                    for &p in input {
                        heap.insert(p).unwrap();
                    }
                    while let Ok(p) = heap.pop() {
                        black_box(p);
                    }
                },
            );
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap/min", n), &input, |b, input| {
            b.iter_with_setup(
                || BinaryHeap::with_capacity(n),
                |mut heap| {
                    for &p in input {
                        heap.push(Reverse(p));
                    }
                    while let Some(p) = heap.pop() {
                        black_box(p);
                    }
                },
            );
        });
    }

    group.finish();
}

// ============================================================================
// Growth from capacity 1
// ============================================================================

fn bench_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("grow");
    let input = priorities(16_384);
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("nexus_heap", |b| {
        b.iter(|| {
            let mut heap = Heap::max(1).unwrap();
            for &p in &input {
                heap.insert(p).unwrap();
            }
            black_box(heap.len())
        });
    });

    group.finish();
}

// ============================================================================
// Cursor removal from the middle
// ============================================================================

fn bench_cursor_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_remove");

    for &n in &SIZES {
        let mut base = Heap::min(n).unwrap();
        base.try_extend(priorities(n)).unwrap();

        group.bench_with_input(BenchmarkId::new("every_other", n), &base, |b, base| {
            b.iter_with_setup(
                || base.clone(),
                |mut heap| {
                    let mut cursor = heap.cursor();
                    let mut keep = true;
                    while cursor.next().is_some() {
                        if !keep {
                            black_box(cursor.remove().unwrap());
                        }
                        keep = !keep;
                    }
                    heap
                },
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_grow, bench_cursor_remove);

criterion_main!(benches);
