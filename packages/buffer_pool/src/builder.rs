use crate::{BufferPool, DropPolicy};

/// Builder for creating an instance of [`BufferPool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`BufferPool::new()`][1] is sufficient for most
/// use cases.
///
/// # Examples
///
/// ```
/// use buffer_pool::{BufferPool, DropPolicy};
///
/// let pool = BufferPool::<2, 50>::builder()
///     .drop_policy(DropPolicy::MayDropAllocated)
///     .build();
/// ```
///
/// [1]: BufferPool::new
#[derive(Debug)]
#[must_use]
pub struct BufferPoolBuilder<const POOL_SIZE: usize, const BUFFER_SIZE: usize> {
    drop_policy: DropPolicy,
}

impl<const POOL_SIZE: usize, const BUFFER_SIZE: usize> BufferPoolBuilder<POOL_SIZE, BUFFER_SIZE> {
    pub(crate) fn new() -> Self {
        Self {
            drop_policy: DropPolicy::default(),
        }
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how to treat
    /// still-allocated buffers when the pool is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use buffer_pool::{BufferPool, DropPolicy};
    ///
    /// let pool = BufferPool::<2, 50>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropAllocated)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the buffer pool with the specified configuration.
    ///
    /// A pool with `POOL_SIZE == 0` is rejected at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use buffer_pool::BufferPool;
    ///
    /// let pool = BufferPool::<2, 50>::builder().build();
    /// ```
    #[must_use]
    pub fn build(self) -> BufferPool<POOL_SIZE, BUFFER_SIZE> {
        BufferPool::new_inner(self.drop_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_builds() {
        let pool: BufferPool<2, 8> = BufferPoolBuilder::new().build();

        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 2);
        assert_eq!(pool.buffer_capacity(), 8);
    }

    #[test]
    fn drop_policy_is_applied() {
        // Indirectly observable: the pool built here accepts an idle drop.
        let pool = BufferPool::<1, 8>::builder()
            .drop_policy(DropPolicy::MustNotDropAllocated)
            .build();

        drop(pool);
    }
}
