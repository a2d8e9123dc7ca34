// benches/profile_heap.rs
//! Per-operation latency distribution for nexus_heap
//!
//! Holds the heap at a steady size and records cycles for each
//! insert / pop / cursor remove.
//!
//! Run: cargo bench --bench profile_heap
//! Profile: sudo perf stat -e cycles,instructions,cache-misses ./target/release/deps/profile_heap-*

use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use hdrhistogram::Histogram;
use nexus_heap::Heap;

const HEAP_SIZE: usize = 1024;
const WARMUP: usize = 10_000;
const SAMPLES: usize = 100_000;

#[cfg(target_arch = "x86_64")]
#[inline]
fn rdtscp() -> u64 {
    unsafe {
        let mut aux: u32 = 0;
        core::arch::x86_64::__rdtscp(&mut aux)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn rdtscp() -> u64 {
    Instant::now().elapsed().as_nanos() as u64
}

fn estimate_cpu_freq_ghz() -> f64 {
    let start_cycles = rdtscp();
    let start_time = Instant::now();
    thread::sleep(Duration::from_millis(10));
    let end_cycles = rdtscp();
    let elapsed = start_time.elapsed();
    end_cycles.wrapping_sub(start_cycles) as f64 / elapsed.as_nanos() as f64
}

struct Histograms {
    insert: Histogram<u64>,
    pop: Histogram<u64>,
    remove: Histogram<u64>,
}

fn run() -> Histograms {
    let mut heap = Heap::min(HEAP_SIZE).unwrap();
    for i in 0..HEAP_SIZE as u64 {
        heap.insert((i * 7 + 13) % HEAP_SIZE as u64).unwrap();
    }

    let mut hists = Histograms {
        insert: Histogram::<u64>::new_with_max(1_000_000, 3).unwrap(),
        pop: Histogram::<u64>::new_with_max(1_000_000, 3).unwrap(),
        remove: Histogram::<u64>::new_with_max(1_000_000, 3).unwrap(),
    };

    for i in 0..WARMUP + SAMPLES {
        let record = i >= WARMUP;

        let start = rdtscp();
        let popped = black_box(heap.pop().unwrap());
        let elapsed = rdtscp().wrapping_sub(start);
        if record {
            let _ = hists.pop.record(elapsed.min(1_000_000));
        }

        let start = rdtscp();
        heap.insert(popped + (i % HEAP_SIZE) as u64).unwrap();
        let elapsed = rdtscp().wrapping_sub(start);
        if record {
            let _ = hists.insert.record(elapsed.min(1_000_000));
        }

        // Remove from around half depth, then put it back to hold size.
        let victim_pos = heap.len() / 2;
        let mut cursor = heap.cursor();
        for _ in 0..=victim_pos {
            cursor.next();
        }
        let start = rdtscp();
        let victim = black_box(cursor.remove().unwrap());
        let elapsed = rdtscp().wrapping_sub(start);
        if record {
            let _ = hists.remove.record(elapsed.min(1_000_000));
        }
        heap.insert(victim).unwrap();
    }

    hists
}

fn print_stats(name: &str, hist: &Histogram<u64>, ghz: f64) {
    println!(
        "{:8} | p50: {:5} cycles ({:6.1} ns) | p99: {:5} cycles | p999: {:6} cycles | max: {:7}",
        name,
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.50) as f64 / ghz,
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.max(),
    );
}

fn main() {
    let ghz = estimate_cpu_freq_ghz();
    println!("Estimated TSC frequency: {:.2} GHz", ghz);

    let hists = run();

    println!(
        "\nHeap<u64> ({} samples, heap size {})",
        SAMPLES, HEAP_SIZE
    );
    println!("----------------------------------------------------------------------------------");
    print_stats("insert", &hists.insert, ghz);
    print_stats("pop", &hists.pop, ghz);
    print_stats("remove", &hists.remove, ghz);
    println!();
}
