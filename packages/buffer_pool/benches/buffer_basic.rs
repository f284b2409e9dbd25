//! Basic benchmarks for the `buffer_pool` crate.
//!
//! The allocation tracker output is the interesting part: every operation except
//! pool construction itself must report zero allocations.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::time::Instant;

use alloc_tracker::Allocator;
use buffer_pool::BufferPool;
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

const POOL_SIZE: usize = 64;
const BUFFER_SIZE: usize = 256;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("buffer_basic");

    let allocs_op = allocs.operation("build_pool");
    group.bench_function("build_pool", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(BufferPool::<POOL_SIZE, BUFFER_SIZE>::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("alloc_free");
    group.bench_function("alloc_free", |b| {
        b.iter_custom(|iters| {
            let mut pool = BufferPool::<POOL_SIZE, BUFFER_SIZE>::new();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let key = pool.alloc().expect("pool is drained back to empty every iteration");
                pool.free(black_box(key));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("append_64");
    group.bench_function("append_64", |b| {
        b.iter_custom(|iters| {
            let mut pool = BufferPool::<POOL_SIZE, BUFFER_SIZE>::new();
            let key = pool.alloc().expect("a new pool has every buffer free");
            let payload = [0x5A_u8; 64];

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let buffer = pool.get_mut(&key);
                buffer.clear();
                _ = black_box(buffer.append(black_box(&payload)));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("exhaust_and_refill");
    group.bench_function("exhaust_and_refill", |b| {
        b.iter_custom(|iters| {
            let mut pool = BufferPool::<POOL_SIZE, BUFFER_SIZE>::new();
            let mut keys = Vec::with_capacity(POOL_SIZE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                while let Some(key) = pool.alloc() {
                    keys.push(key);
                }

                for key in keys.drain(..) {
                    pool.free(key);
                }
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
