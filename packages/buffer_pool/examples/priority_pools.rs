//! Two independently sized pools modeling different priority classes of buffer:
//!
//! * A small input pool that exhausts quickly.
//! * A larger output pool that keeps allocating when the input pool is dry.
//!
//! Exercises exhaustion, release, and reuse across pool boundaries.

use buffer_pool::BufferPool;

fn main() {
    // Distinct parameterizations: the compiler treats these as unrelated types, so a
    // key from one pool cannot even be passed to the other.
    let mut input_pool = BufferPool::<2, 50>::new();
    let mut output_pool = BufferPool::<4, 100>::new();

    println!("Get two buffers from the input pool");
    let b1 = input_pool.alloc().expect("input pool starts with 2 free buffers");
    let b2 = input_pool.alloc().expect("one input buffer remains");
    println!("Input pool: {}/{} allocated", input_pool.len(), input_pool.capacity());

    println!("A third allocation finds the input pool exhausted");
    assert!(input_pool.alloc().is_none());
    assert!(input_pool.is_full());

    println!("Free one input buffer; the pool becomes allocatable again");
    input_pool.free(b2);
    let b3 = input_pool
        .alloc()
        .expect("a buffer was just returned to the input pool");

    // The input pool being exhausted never affects the output pool - each pool owns
    // its storage outright.
    println!("Meanwhile the output pool still has all {} buffers", output_pool.capacity());
    let b4 = output_pool.alloc().expect("output pool is untouched");
    let b5 = output_pool.alloc().expect("3 output buffers remain");
    let b6 = output_pool.alloc().expect("2 output buffers remain");
    let b7 = output_pool.alloc().expect("1 output buffer remains");
    println!(
        "Output pool: {}/{} allocated",
        output_pool.len(),
        output_pool.capacity()
    );

    println!("Write \"hello world\" into the first output buffer");
    let wrote = output_pool.get_mut(&b4).append(b"hello world");
    assert_eq!(wrote, 11);
    println!(
        "Wrote {wrote} bytes, buffer length is now {}",
        output_pool.get(&b4).len()
    );

    input_pool.free(b1);
    input_pool.free(b3);
    output_pool.free(b4);
    output_pool.free(b5);
    output_pool.free(b6);
    output_pool.free(b7);

    println!(
        "All buffers returned: input {} allocated, output {} allocated",
        input_pool.len(),
        output_pool.len()
    );
}
