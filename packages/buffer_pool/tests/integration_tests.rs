//! Integration tests for the `buffer_pool` package.
//!
//! These tests exercise the public API surface the way an application would,
//! including the exhaustion, reuse, truncation, and independence contracts.

use buffer_pool::{BufferPool, DropPolicy};

#[test]
fn input_pool_scenario() {
    // A small pool of two 50-byte buffers, exercised to exhaustion and back.
    let mut pool = BufferPool::<2, 50>::new();

    let b1 = pool.alloc().expect("first allocation succeeds");
    let b2 = pool.alloc().expect("second allocation succeeds");
    assert_ne!(b1, b2);

    // Third allocation fails softly: the pool is exhausted.
    assert!(pool.alloc().is_none());
    assert!(pool.is_full());
    assert_eq!(pool.len(), 2);

    // Freeing b2 consumes it and opens a slot.
    pool.free(b2);
    assert_eq!(pool.len(), 1);

    let b3 = pool.alloc().expect("a buffer was just freed");

    // Exhausted again.
    assert!(pool.alloc().is_none());

    pool.free(b3);
    pool.free(b1);
    assert!(pool.is_empty());
}

#[test]
fn output_pool_scenario() {
    // A larger pool of four 100-byte buffers used for writing.
    let mut pool = BufferPool::<4, 100>::new();

    let b4 = pool.alloc().expect("first allocation succeeds");
    let b5 = pool.alloc().expect("second allocation succeeds");
    let b6 = pool.alloc().expect("third allocation succeeds");
    let b7 = pool.alloc().expect("fourth allocation succeeds");

    let wrote = pool.get_mut(&b4).append(b"hello world");
    assert_eq!(wrote, 11);
    assert_eq!(pool.get(&b4).len(), 11);
    assert_eq!(pool.get(&b4).data(), b"hello world");

    // The write touched only b4.
    assert_eq!(pool.get(&b5).len(), 0);

    pool.free(b4);
    pool.free(b5);
    pool.free(b6);
    pool.free(b7);
}

#[test]
fn most_recently_freed_storage_is_reused() {
    let mut pool = BufferPool::<3, 16>::new();

    let a = pool.alloc().expect("slot available");
    let b = pool.alloc().expect("slot available");

    // Identify b's backing storage by address before giving it back.
    let b_storage = pool.get(&b).data().as_ptr();

    pool.free(b);

    // LIFO reuse: the next allocation gets the storage b just vacated.
    let c = pool.alloc().expect("a buffer was just freed");
    assert_eq!(pool.get(&c).data().as_ptr(), b_storage);

    pool.free(a);
    pool.free(c);
}

#[test]
fn reallocated_buffer_starts_empty() {
    let mut pool = BufferPool::<1, 32>::new();

    let key = pool.alloc().expect("slot available");
    pool.get_mut(&key).append(b"previous tenant data");
    pool.free(key);

    let key = pool.alloc().expect("slot available");
    assert_eq!(pool.get(&key).len(), 0);
    assert!(pool.get(&key).data().is_empty());

    pool.free(key);
}

#[test]
fn append_truncates_against_remaining_capacity() {
    let mut pool = BufferPool::<1, 8>::new();
    let key = pool.alloc().expect("slot available");

    assert_eq!(pool.get_mut(&key).append(b"hello"), 5);

    // 3 bytes remain; a 5 byte append is cut short.
    assert_eq!(pool.get_mut(&key).append(b"world"), 3);
    assert_eq!(pool.get(&key).len(), 8);
    assert_eq!(pool.get(&key).data(), b"hellowor");

    // Clearing restarts writes from offset zero.
    pool.get_mut(&key).clear();
    assert_eq!(pool.get_mut(&key).append(b"again"), 5);
    assert_eq!(pool.get(&key).data(), b"again");

    pool.free(key);
}

#[test]
fn pools_do_not_share_capacity() {
    let mut first = BufferPool::<2, 16>::new();
    let mut second = BufferPool::<2, 16>::new();

    let a1 = first.alloc().expect("slot available");
    let a2 = first.alloc().expect("slot available");
    assert!(first.alloc().is_none());

    // Exhausting the first pool leaves the second untouched.
    let b1 = second.alloc().expect("second pool is independent");
    let b2 = second.alloc().expect("second pool is independent");

    first.free(a1);
    first.free(a2);
    second.free(b1);
    second.free(b2);
}

#[test]
fn zero_size_buffers_accept_writes() {
    let mut pool = BufferPool::<1, 0>::new();

    let key = pool.alloc().expect("slot available");
    assert_eq!(pool.get_mut(&key).append(b"dropped"), 0);
    assert_eq!(pool.get(&key).capacity(), 0);

    pool.free(key);
}

#[test]
#[should_panic]
fn strict_drop_policy_catches_leaked_buffers() {
    let mut pool = BufferPool::<2, 8>::builder()
        .drop_policy(DropPolicy::MustNotDropAllocated)
        .build();

    let _leaked = pool.alloc().expect("slot available");

    // Dropping while a buffer is still allocated violates the policy.
    drop(pool);
}

#[test]
fn default_drop_policy_tolerates_leaked_buffers() {
    let mut pool = BufferPool::<2, 8>::new();

    let _leaked = pool.alloc().expect("slot available");

    drop(pool);
}
