//! Basic usage of the `buffer_pool` crate:
//!
//! * Creating a pool.
//! * Allocating a buffer.
//! * Writing data through the key.
//! * Returning the buffer to the pool.

use buffer_pool::BufferPool;

fn main() {
    // Four buffers of 64 bytes each, all storage reserved right here.
    let mut pool = BufferPool::<4, 64>::new();

    // Allocating hands back a key, not a pointer. The key is the only way to reach
    // the buffer, and freeing will consume it.
    let key = pool.alloc().expect("a new pool has every buffer free");

    println!(
        "Pool has {} of {} buffers allocated, {} bytes each",
        pool.len(),
        pool.capacity(),
        pool.buffer_capacity()
    );

    // Appends report how many bytes they actually wrote. Here everything fits.
    let written = pool.get_mut(&key).append(b"measurement batch 1");
    println!("Wrote {written} bytes: {:?}", pool.get(&key).data());

    // A write that does not fit is truncated to the remaining capacity rather than
    // failing - the short return count is the only signal.
    let written = pool.get_mut(&key).append(&[0x55; 100]);
    println!(
        "Wrote {written} of 100 bytes, buffer now at {}/{}",
        pool.get(&key).len(),
        pool.get(&key).capacity()
    );

    // Accessing a buffer borrows the pool, so interleave lookups rather than holding
    // the reference across other pool calls. Lookups by key are cheap.
    pool.get_mut(&key).clear();
    println!("After clear: {} bytes used", pool.get(&key).len());

    // Freeing consumes the key. Using `key` after this line does not compile.
    pool.free(key);
    println!("Pool is idle again: {} buffers allocated", pool.len());
}
