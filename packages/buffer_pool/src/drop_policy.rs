/// Determines pool behavior when the pool is dropped while buffers are still allocated.
///
/// By default, dropping a pool with outstanding [`Key`][crate::Key]s is permitted -
/// the keys become inert and the storage goes away with the pool.
///
/// # Examples
///
/// ```
/// use buffer_pool::{BufferPool, DropPolicy};
///
/// // The drop policy is set at pool creation time.
/// let pool = BufferPool::<4, 100>::builder()
///     .drop_policy(DropPolicy::MustNotDropAllocated)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool may be dropped while buffers are still allocated. This is the default.
    #[default]
    MayDropAllocated,

    /// The pool will panic if any buffer is still allocated when the pool is dropped.
    ///
    /// This may be valuable for catching lifecycle bugs during development: a buffer
    /// that is never returned to its pool is permanently lost capacity, and with this
    /// policy the leak surfaces at the pool's end of life instead of silently shrinking
    /// the pool's effective size.
    MustNotDropAllocated,
}
