//! A fixed-capacity pool of reusable byte buffers with no runtime memory allocation.
//!
//! This crate provides [`BufferPool`], a pool that reserves all of its storage when it
//! is constructed - an inline array of `POOL_SIZE` slots of `BUFFER_SIZE` bytes each,
//! expressed as const generic parameters - and thereafter hands out and reclaims
//! buffers in O(1) without ever touching the heap. It targets environments where
//! allocation must be deterministic and bounded, such as embedded or real-time code.
//!
//! # Key Features
//!
//! - **Zero runtime allocation**: All storage is reserved at pool construction
//! - **Compile-time sizing**: Pool and buffer sizes are const generic parameters
//! - **O(1) alloc and free**: Intrusive index free list, no search, no fragmentation
//! - **LIFO reuse**: The most recently freed buffer is handed out first
//! - **Single-use keys**: [`Key`] is consumed on free, so double-free and
//!   use-after-free do not compile
//! - **Pool branding**: Keys only work with the pool that issued them; a foreign key
//!   is rejected with a panic
//! - **Graceful exhaustion**: An exhausted pool returns `None` - it never blocks,
//!   grows, or panics to satisfy an allocation
//! - **Drop policies**: Optionally panic when a pool is dropped with buffers still
//!   allocated, for catching lifecycle bugs
//!
//! # Example
//!
//! ```rust
//! use buffer_pool::BufferPool;
//!
//! // Two buffers of 50 bytes each, reserved up front.
//! let mut pool = BufferPool::<2, 50>::new();
//!
//! let key = pool.alloc().expect("a new pool has every buffer free");
//!
//! // Writes go through the key; truncation is reported via the return count.
//! let written = pool.get_mut(&key).append(b"hello world");
//! assert_eq!(written, 11);
//! assert_eq!(pool.get(&key).data(), b"hello world");
//!
//! // Freeing consumes the key, so it cannot be used again.
//! pool.free(key);
//! ```
//!
//! # Exhaustion
//!
//! ```rust
//! use buffer_pool::BufferPool;
//!
//! let mut pool = BufferPool::<2, 50>::new();
//!
//! let first = pool.alloc().expect("a new pool has every buffer free");
//! let second = pool.alloc().expect("one slot remains");
//!
//! // The pool is exhausted; allocation fails softly.
//! assert!(pool.alloc().is_none());
//!
//! // Freeing a buffer makes the pool allocatable again, most recently freed first.
//! pool.free(second);
//! let third = pool.alloc().expect("a buffer was just freed");
//! # pool.free(first);
//! # pool.free(third);
//! ```
//!
//! # Placement
//!
//! The pool is a plain value with inline storage: `size_of::<BufferPool<N, S>>()` is
//! roughly `N * S` bytes. Small pools live happily on the stack; for large ones,
//! construct the pool in a `Box` or place it in a `static` so the stack frame stays
//! small. Neither changes the pool's behavior - after construction, no further
//! allocation happens either way.

mod buffer;
mod builder;
mod drop_policy;
mod pool;

pub use buffer::*;
pub use builder::*;
pub use drop_policy::*;
pub use pool::*;
