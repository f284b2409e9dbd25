use std::array;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::{Buffer, BufferPoolBuilder, DropPolicy};

/// Global counter for generating unique pool IDs.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a unique pool ID.
fn generate_pool_id() -> u64 {
    POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A fixed-capacity pool of reusable byte buffers that performs no memory allocation
/// after construction.
///
/// The pool owns an inline array of `POOL_SIZE` slots, each holding one
/// [`Buffer<BUFFER_SIZE>`][Buffer]. All storage is reserved when the pool is created -
/// on the stack, in a `static`, or wherever the caller places the pool value - and is
/// never grown, shrunk, or moved for the pool's entire lifetime. This makes allocation
/// cost deterministic and bounded, which is the point: the pool targets contexts where
/// heap allocation at runtime is not acceptable.
///
/// # Allocation model
///
/// [`alloc()`][Self::alloc] pops a slot off an intrusive free list of slot indices and
/// returns a [`Key`] referencing it; [`free()`][Self::free] consumes the key and pushes
/// the slot back onto the head of the list. Both operations are O(1) with no search and
/// no fragmentation, since every buffer in a pool has identical capacity. The free list
/// is LIFO: the most recently freed buffer is reused first.
///
/// An exhausted pool does not block, grow, or panic - [`alloc()`][Self::alloc] simply
/// returns `None` until a buffer is freed.
///
/// # Keys
///
/// A [`Key`] is an opaque token, not a memory reference. It cannot be copied or cloned,
/// and [`free()`][Self::free] consumes it, so releasing a buffer twice or touching a
/// buffer after release is a compile-time error rather than a runtime hazard. Passing a
/// key to a pool other than the one that issued it is a contract violation and panics.
///
/// # Thread safety
///
/// The pool is a synchronous single-threaded data structure with no internal locking.
/// Every mutating operation requires `&mut self`, so concurrent use requires external
/// synchronization, e.g. wrapping the pool in a caller-owned `Mutex`.
///
/// # Example
///
/// ```rust
/// use buffer_pool::BufferPool;
///
/// let mut pool = BufferPool::<2, 50>::new();
///
/// let key = pool.alloc().expect("a new pool has every buffer free");
/// assert_eq!(pool.get_mut(&key).append(b"hello world"), 11);
/// assert_eq!(pool.get(&key).data(), b"hello world");
///
/// pool.free(key);
/// assert!(pool.is_empty());
/// ```
#[derive(Debug)]
pub struct BufferPool<const POOL_SIZE: usize, const BUFFER_SIZE: usize> {
    /// Inline storage for every slot. Reserved once at construction; individual slots
    /// are recycled, never destroyed or moved.
    slots: [Slot<BUFFER_SIZE>; POOL_SIZE],

    /// Index of the first free slot. Think of this as a virtual stack of the most
    /// recently freed slots, with the stack entries stored in the slots themselves.
    /// Also known as intrusive freelist. This points out of bounds if the pool
    /// is exhausted.
    next_free_index: usize,

    /// The number of currently allocated buffers.
    count: usize,

    /// Process-unique brand stamped into every key this pool issues, so a key can only
    /// ever be used with the pool it came from.
    pool_id: u64,

    drop_policy: DropPolicy,
}

/// A key that references one allocated buffer in a [`BufferPool`].
///
/// Keys are opaque tokens returned by [`BufferPool::alloc()`]. They provide access to
/// the allocated buffer via [`BufferPool::get()`] and [`BufferPool::get_mut()`], and are
/// consumed by [`BufferPool::free()`].
///
/// # Single use
///
/// Unlike an ordinary collection key, a `Key` cannot be copied or cloned: exactly one
/// key exists per allocated buffer, and freeing the buffer consumes it. The slot index
/// a key referenced may be handed out again by a later allocation, but the old key is
/// gone by then - there is no window in which two live keys reference one slot.
///
/// # Example
///
/// ```rust
/// use buffer_pool::BufferPool;
///
/// let mut pool = BufferPool::<2, 8>::new();
///
/// let key = pool.alloc().expect("a new pool has every buffer free");
/// pool.get_mut(&key).append(b"abc");
///
/// pool.free(key);
/// // `key` is moved and cannot be used again.
/// ```
#[derive(Debug, Eq, PartialEq)]
pub struct Key {
    /// Ensures this key can only be returned to the pool it came from.
    pool_id: u64,

    index: usize,
}

#[derive(Debug)]
struct Slot<const BUFFER_SIZE: usize> {
    buffer: Buffer<BUFFER_SIZE>,

    state: SlotState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SlotState {
    /// The slot is on the free list. For the last free slot, `next_free_index` points
    /// out of bounds.
    Vacant { next_free_index: usize },

    /// The slot's buffer is allocated to a caller under a [`Key`].
    Occupied,
}

impl<const POOL_SIZE: usize, const BUFFER_SIZE: usize> BufferPool<POOL_SIZE, BUFFER_SIZE> {
    pub(crate) fn new_inner(drop_policy: DropPolicy) -> Self {
        // Evaluated during monomorphization, so a zero-slot pool fails to compile.
        const { assert!(POOL_SIZE > 0, "BufferPool must have at least one slot") };

        Self {
            // Slots start zeroed, with the free list chained in array order:
            // slot i links to slot i + 1 and the last slot links out of bounds.
            slots: array::from_fn(|index| Slot {
                buffer: Buffer::new(),
                state: SlotState::Vacant {
                    next_free_index: index
                        .checked_add(1)
                        .expect("index is below POOL_SIZE, so its successor fits in a usize"),
                },
            }),
            next_free_index: 0,
            count: 0,
            pool_id: generate_pool_id(),
            drop_policy,
        }
    }

    /// Creates a new [`BufferPool`] with the default configuration.
    ///
    /// All `POOL_SIZE` buffers start free and zeroed.
    ///
    /// A pool with `POOL_SIZE == 0` is rejected at compile time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<4, 100>::new();
    ///
    /// assert_eq!(pool.len(), 0);
    /// assert_eq!(pool.capacity(), 4);
    /// assert_eq!(pool.buffer_capacity(), 100);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`BufferPool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::{BufferPool, DropPolicy};
    ///
    /// let pool = BufferPool::<4, 100>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropAllocated)
    ///     .build();
    ///
    /// assert!(pool.is_empty());
    /// ```
    pub fn builder() -> BufferPoolBuilder<POOL_SIZE, BUFFER_SIZE> {
        BufferPoolBuilder::new()
    }

    /// The number of currently allocated buffers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<2, 8>::new();
    /// assert_eq!(pool.len(), 0);
    ///
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    /// assert_eq!(pool.len(), 1);
    ///
    /// pool.free(key);
    /// assert_eq!(pool.len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no buffers are currently allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether every buffer is currently allocated, so the next
    /// [`alloc()`][Self::alloc] will return `None`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_free_index >= POOL_SIZE
    }

    /// The total number of buffers in the pool, free and allocated alike.
    ///
    /// Always equals `POOL_SIZE` - the pool never grows or shrinks.
    #[must_use]
    pub fn capacity(&self) -> usize {
        POOL_SIZE
    }

    /// The fixed byte capacity of every buffer in the pool.
    ///
    /// Always equals `BUFFER_SIZE`.
    #[must_use]
    pub fn buffer_capacity(&self) -> usize {
        BUFFER_SIZE
    }

    /// Allocates a buffer, or returns `None` if the pool is exhausted.
    ///
    /// The most recently freed buffer is reused first. The returned buffer starts with
    /// a used length of zero: stale length from the slot's previous tenure is reset
    /// here, at allocation time, keeping the release path minimal.
    ///
    /// Exhaustion is the only way this operation can fail, and it is signalled purely
    /// through the return value - the pool never blocks, grows, or panics to satisfy
    /// an allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<2, 8>::new();
    ///
    /// let first = pool.alloc().expect("a new pool has every buffer free");
    /// let second = pool.alloc().expect("one slot remains");
    ///
    /// // The pool is exhausted now.
    /// assert!(pool.alloc().is_none());
    ///
    /// pool.free(first);
    ///
    /// // Freeing made a buffer available again.
    /// assert!(pool.alloc().is_some());
    /// # pool.free(second);
    /// ```
    #[must_use]
    pub fn alloc(&mut self) -> Option<Key> {
        #[cfg(debug_assertions)]
        self.integrity_check();

        let index = self.next_free_index;

        // An out-of-bounds free list head means the pool is exhausted.
        let slot = self.slots.get_mut(index)?;

        self.next_free_index = match slot.state {
            SlotState::Vacant { next_free_index } => next_free_index,
            SlotState::Occupied => {
                panic!("free list head references occupied slot {index}")
            }
        };

        slot.state = SlotState::Occupied;

        // Lazy reset: the slot kept whatever length it had when it was freed, and we
        // clear it only now that the slot is being handed out again.
        slot.buffer.clear();

        self.count = self
            .count
            .checked_add(1)
            .expect("count is bounded by POOL_SIZE, which fits in a usize");

        Some(Key {
            pool_id: self.pool_id,
            index,
        })
    }

    /// Returns an allocated buffer to the pool, consuming its key.
    ///
    /// The slot goes back onto the head of the free list in O(1). The buffer's contents
    /// and used length are deliberately left as-is; the length is reset by the next
    /// [`alloc()`][Self::alloc] that hands the slot out again.
    ///
    /// Because the key is consumed, a double free or a use after free does not compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 8>::new();
    ///
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    /// assert!(pool.is_full());
    ///
    /// pool.free(key);
    /// assert!(pool.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the key was issued by a different pool.
    pub fn free(&mut self, key: Key) {
        assert!(
            key.pool_id == self.pool_id,
            "attempted to free a key from a different pool (key pool ID: {}, current pool ID: {})",
            key.pool_id,
            self.pool_id
        );

        let next_free_index = self.next_free_index;

        let slot = self
            .slots
            .get_mut(key.index)
            .expect("a key with a matching pool ID always references a slot in bounds");

        assert!(
            matches!(slot.state, SlotState::Occupied),
            "free({}) slot was already vacant",
            key.index
        );

        slot.state = SlotState::Vacant { next_free_index };

        self.next_free_index = key.index;

        self.count = self
            .count
            .checked_sub(1)
            .expect("we asserted above that the slot is occupied, so count must be non-zero");
    }

    /// A shared view of the buffer referenced by `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 16>::new();
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    ///
    /// pool.get_mut(&key).append(b"data");
    ///
    /// let buffer = pool.get(&key);
    /// assert_eq!(buffer.len(), 4);
    /// assert_eq!(buffer.capacity(), 16);
    /// # pool.free(key);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the key was issued by a different pool.
    #[must_use]
    pub fn get(&self, key: &Key) -> &Buffer<BUFFER_SIZE> {
        assert!(
            key.pool_id == self.pool_id,
            "attempted to access a key from a different pool (key pool ID: {}, current pool ID: {})",
            key.pool_id,
            self.pool_id
        );

        let slot = self
            .slots
            .get(key.index)
            .expect("a key with a matching pool ID always references a slot in bounds");

        assert!(
            matches!(slot.state, SlotState::Occupied),
            "get({}) slot was vacant",
            key.index
        );

        &slot.buffer
    }

    /// An exclusive view of the buffer referenced by `key`, for writing.
    ///
    /// The returned reference borrows the pool, so only one buffer can be written at a
    /// time; re-lookup by key is cheap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 16>::new();
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    ///
    /// let buffer = pool.get_mut(&key);
    /// buffer.append(b"first");
    /// buffer.append(b" second");
    ///
    /// assert_eq!(pool.get(&key).data(), b"first second");
    /// # pool.free(key);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the key was issued by a different pool.
    #[must_use]
    pub fn get_mut(&mut self, key: &Key) -> &mut Buffer<BUFFER_SIZE> {
        assert!(
            key.pool_id == self.pool_id,
            "attempted to access a key from a different pool (key pool ID: {}, current pool ID: {})",
            key.pool_id,
            self.pool_id
        );

        let slot = self
            .slots
            .get_mut(key.index)
            .expect("a key with a matching pool ID always references a slot in bounds");

        assert!(
            matches!(slot.state, SlotState::Occupied),
            "get_mut({}) slot was vacant",
            key.index
        );

        &mut slot.buffer
    }

    #[cfg(debug_assertions)]
    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    fn integrity_check(&self) {
        let mut on_free_list = [false; POOL_SIZE];
        let mut free_len: usize = 0;
        let mut index = self.next_free_index;

        while let Some(slot) = self.slots.get(index) {
            let seen = on_free_list
                .get_mut(index)
                .expect("guarded by the slot lookup above");

            assert!(
                !*seen,
                "free list visits slot {index} twice, so it contains a duplicate or a cycle"
            );
            *seen = true;

            free_len = free_len
                .checked_add(1)
                .expect("the free list cannot be longer than POOL_SIZE");

            index = match slot.state {
                SlotState::Vacant { next_free_index } => next_free_index,
                SlotState::Occupied => panic!("free list contains occupied slot {index}"),
            };
        }

        let total = free_len
            .checked_add(self.count)
            .expect("both terms are bounded by POOL_SIZE");

        assert!(
            total == POOL_SIZE,
            "free list length {free_len} plus allocated count {} does not equal POOL_SIZE {POOL_SIZE}",
            self.count
        );
    }
}

impl<const POOL_SIZE: usize, const BUFFER_SIZE: usize> Default
    for BufferPool<POOL_SIZE, BUFFER_SIZE>
{
    /// Creates a new [`BufferPool`] with the default configuration.
    fn default() -> Self {
        Self::new()
    }
}

impl<const POOL_SIZE: usize, const BUFFER_SIZE: usize> Drop for BufferPool<POOL_SIZE, BUFFER_SIZE> {
    fn drop(&mut self) {
        // If we are already panicking, we do not want to panic again because that will
        // simply obscure whatever the original panic was, leading to debug difficulties.
        if self.drop_policy == DropPolicy::MustNotDropAllocated && !thread::panicking() {
            assert!(
                self.is_empty(),
                "dropped a pool with {} buffers still allocated under a policy that says it must be idle when dropped",
                self.count
            );
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "tests focus on succinct code and do not need to tick all the boxes"
)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    assert_impl_all!(BufferPool<2, 8>: Send, Sync);
    assert_impl_all!(Key: Send, Sync);

    // One key per allocated buffer - a copyable key would reintroduce use after free.
    assert_not_impl_any!(Key: Clone, Copy);

    #[test]
    fn smoke_test() {
        let mut pool = BufferPool::<3, 16>::new();

        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
        assert!(!pool.is_full());
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.buffer_capacity(), 16);

        let key_a = pool.alloc().expect("slot available");
        let key_b = pool.alloc().expect("slot available");

        assert_eq!(pool.len(), 2);
        assert_ne!(key_a, key_b);

        pool.get_mut(&key_a).append(b"aaa");
        pool.get_mut(&key_b).append(b"bb");

        assert_eq!(pool.get(&key_a).data(), b"aaa");
        assert_eq!(pool.get(&key_b).data(), b"bb");

        pool.free(key_a);
        pool.free(key_b);

        assert!(pool.is_empty());
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let mut pool = BufferPool::<2, 8>::new();

        let key_a = pool.alloc().expect("slot available");
        let key_b = pool.alloc().expect("slot available");

        assert!(pool.is_full());
        assert!(pool.alloc().is_none());

        // Still exhausted - a failed allocation changes nothing.
        assert!(pool.alloc().is_none());
        assert_eq!(pool.len(), 2);

        pool.free(key_a);
        pool.free(key_b);
    }

    #[test]
    fn freeing_makes_exhausted_pool_allocatable() {
        let mut pool = BufferPool::<1, 8>::new();

        let key = pool.alloc().expect("slot available");
        assert!(pool.alloc().is_none());

        pool.free(key);

        let key = pool.alloc().expect("the freed slot is available again");
        pool.free(key);
    }

    #[test]
    fn most_recently_freed_slot_is_reused_first() {
        let mut pool = BufferPool::<3, 8>::new();

        let key_a = pool.alloc().expect("slot available");
        let key_b = pool.alloc().expect("slot available");
        let key_c = pool.alloc().expect("slot available");

        let freed_index = key_b.index;
        pool.free(key_b);

        let key_d = pool.alloc().expect("a slot was just freed");
        assert_eq!(key_d.index, freed_index);

        pool.free(key_a);
        pool.free(key_c);
        pool.free(key_d);
    }

    #[test]
    fn free_list_is_initially_chained_in_array_order() {
        let mut pool = BufferPool::<3, 8>::new();

        let key_a = pool.alloc().expect("slot available");
        let key_b = pool.alloc().expect("slot available");
        let key_c = pool.alloc().expect("slot available");

        assert_eq!(key_a.index, 0);
        assert_eq!(key_b.index, 1);
        assert_eq!(key_c.index, 2);

        pool.free(key_a);
        pool.free(key_b);
        pool.free(key_c);
    }

    // Walks the free list so tests can assert that free + allocated == POOL_SIZE
    // on every state a pool passes through.
    fn free_list_len(pool: &BufferPool<4, 8>) -> usize {
        let mut len = 0;
        let mut index = pool.next_free_index;
        while let Some(slot) = pool.slots.get(index) {
            len += 1;
            index = match slot.state {
                SlotState::Vacant { next_free_index } => next_free_index,
                SlotState::Occupied => panic!("free list contains occupied slot"),
            };
        }
        len
    }

    #[test]
    fn conservation_of_slots() {
        let mut pool = BufferPool::<4, 8>::new();

        assert_eq!(free_list_len(&pool) + pool.len(), 4);

        let key_a = pool.alloc().expect("slot available");
        assert_eq!(free_list_len(&pool) + pool.len(), 4);

        let key_b = pool.alloc().expect("slot available");
        assert_eq!(free_list_len(&pool) + pool.len(), 4);

        pool.free(key_a);
        assert_eq!(free_list_len(&pool) + pool.len(), 4);

        pool.free(key_b);
        assert_eq!(free_list_len(&pool) + pool.len(), 4);
    }

    #[test]
    fn length_reset_is_lazy() {
        let mut pool = BufferPool::<1, 16>::new();

        let key = pool.alloc().expect("slot available");
        pool.get_mut(&key).append(b"leftover");

        let index = key.index;
        pool.free(key);

        // The release path does not touch the buffer; the stale length survives
        // until the slot is handed out again.
        assert_eq!(pool.slots.get(index).expect("in bounds").buffer.len(), 8);

        let key = pool.alloc().expect("slot available");
        assert_eq!(pool.get(&key).len(), 0);

        pool.free(key);
    }

    #[test]
    fn freed_buffer_contents_are_not_wiped() {
        let mut pool = BufferPool::<1, 16>::new();

        let key = pool.alloc().expect("slot available");
        pool.get_mut(&key).append(b"secret");

        let index = key.index;
        pool.free(key);

        // Only the logical length is ever reset; the bytes stay in the slot.
        let slot_buffer = &pool.slots.get(index).expect("in bounds").buffer;
        assert_eq!(slot_buffer.data(), b"secret");
    }

    #[test]
    #[should_panic]
    fn free_with_foreign_key_panics() {
        let mut pool_a = BufferPool::<1, 8>::new();
        let mut pool_b = BufferPool::<1, 8>::new();

        let key_a = pool_a.alloc().expect("slot available");

        pool_b.free(key_a);
    }

    #[test]
    #[should_panic]
    fn get_with_foreign_key_panics() {
        let mut pool_a = BufferPool::<1, 8>::new();
        let pool_b = BufferPool::<1, 8>::new();

        let key_a = pool_a.alloc().expect("slot available");

        _ = pool_b.get(&key_a);
    }

    #[test]
    #[should_panic]
    fn get_mut_with_foreign_key_panics() {
        let mut pool_a = BufferPool::<1, 8>::new();
        let mut pool_b = BufferPool::<1, 8>::new();

        let key_a = pool_a.alloc().expect("slot available");

        _ = pool_b.get_mut(&key_a);
    }

    #[test]
    fn pools_are_independent() {
        let mut pool_a = BufferPool::<2, 8>::new();
        let mut pool_b = BufferPool::<2, 8>::new();

        let key_a1 = pool_a.alloc().expect("slot available");
        let key_a2 = pool_a.alloc().expect("slot available");
        assert!(pool_a.alloc().is_none());

        // Exhausting pool A has no effect on pool B.
        let key_b = pool_b.alloc().expect("pool B is untouched");

        pool_a.free(key_a1);
        pool_a.free(key_a2);
        pool_b.free(key_b);
    }

    #[test]
    fn zero_size_buffers_are_permitted() {
        let mut pool = BufferPool::<2, 0>::new();

        let key = pool.alloc().expect("slot available");

        assert_eq!(pool.get(&key).capacity(), 0);
        assert_eq!(pool.get_mut(&key).append(b"anything"), 0);
        assert!(pool.get(&key).data().is_empty());

        pool.free(key);
    }

    #[test]
    fn single_slot_pool_cycles() {
        let mut pool = BufferPool::<1, 4>::new();

        for _ in 0..10 {
            let key = pool.alloc().expect("the only slot is free");
            assert!(pool.alloc().is_none());
            pool.free(key);
        }
    }

    #[test]
    fn default_is_new() {
        let pool = BufferPool::<2, 8>::default();

        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    fn may_drop_allocated_by_default() {
        let mut pool = BufferPool::<1, 8>::new();

        let _key = pool.alloc().expect("slot available");

        // Dropping the pool with an outstanding key is fine under the default policy.
        drop(pool);
    }

    #[test]
    #[should_panic]
    fn must_not_drop_allocated_panics_on_non_idle_drop() {
        let mut pool = BufferPool::<1, 8>::builder()
            .drop_policy(DropPolicy::MustNotDropAllocated)
            .build();

        let _key = pool.alloc().expect("slot available");

        drop(pool);
    }

    #[test]
    fn must_not_drop_allocated_accepts_idle_drop() {
        let mut pool = BufferPool::<1, 8>::builder()
            .drop_policy(DropPolicy::MustNotDropAllocated)
            .build();

        let key = pool.alloc().expect("slot available");
        pool.free(key);

        drop(pool);
    }
}
