use std::fmt;

/// A fixed-capacity byte buffer that tracks how many bytes have been written into it.
///
/// Buffers are owned by a [`BufferPool`][crate::BufferPool] and accessed through the
/// [`Key`][crate::Key] returned at allocation time. A buffer never owns its storage
/// independently of the pool - the pool slot it lives in does, and that slot is recycled
/// when the buffer is freed.
///
/// Writing is append-only: [`append()`][Self::append] copies bytes at the current write
/// position and advances the used length. When the supplied data does not fit into the
/// remaining capacity, only the remaining capacity is copied - a short return count is
/// the sole truncation signal, and no error condition exists.
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
/// assert_eq!(buffer.append(b"hello"), 5);
/// assert_eq!(buffer.data(), b"hello");
/// assert_eq!(buffer.remaining(), 11);
///
/// pool.free(key);
/// ```
pub struct Buffer<const BUFFER_SIZE: usize> {
    bytes: [u8; BUFFER_SIZE],

    /// Number of bytes written so far. Never exceeds `BUFFER_SIZE`.
    len: usize,
}

impl<const BUFFER_SIZE: usize> Buffer<BUFFER_SIZE> {
    /// Creates an empty zeroed buffer. Only the pool constructs buffers.
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
            len: 0,
        }
    }

    /// The bytes written so far, in write order.
    ///
    /// The view covers only the used portion of the buffer, so its length equals
    /// [`len()`][Self::len], not [`capacity()`][Self::capacity].
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 8>::new();
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    ///
    /// assert!(pool.get(&key).data().is_empty());
    ///
    /// pool.get_mut(&key).append(b"abc");
    /// assert_eq!(pool.get(&key).data(), b"abc");
    /// # pool.free(key);
    /// ```
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.bytes
            .get(..self.len)
            .expect("len never exceeds BUFFER_SIZE, so the used range is always in bounds")
    }

    /// The maximum byte length of this buffer.
    ///
    /// Constant for the buffer's entire lifetime - every buffer in a pool has the same
    /// fixed capacity, set by the pool's `BUFFER_SIZE` parameter.
    #[must_use]
    pub fn capacity(&self) -> usize {
        BUFFER_SIZE
    }

    /// The number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes have been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of bytes that can still be appended before the buffer is full.
    #[must_use]
    pub fn remaining(&self) -> usize {
        BUFFER_SIZE
            .checked_sub(self.len)
            .expect("len never exceeds BUFFER_SIZE")
    }

    /// Resets the used length to zero.
    ///
    /// The underlying memory contents are not erased - only the logical length is reset,
    /// so a subsequent [`append()`][Self::append] starts writing from offset zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 8>::new();
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    ///
    /// let buffer = pool.get_mut(&key);
    /// buffer.append(b"stale");
    /// buffer.clear();
    ///
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.append(b"fresh"), 5);
    /// assert_eq!(buffer.data(), b"fresh");
    /// # pool.free(key);
    /// ```
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends bytes at the current write position, returning how many were copied.
    ///
    /// If `data` exceeds the remaining capacity, only the remaining capacity is copied.
    /// This partial write is not an error - compare the return value against
    /// `data.len()` to detect truncation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use buffer_pool::BufferPool;
    ///
    /// let mut pool = BufferPool::<1, 8>::new();
    /// let key = pool.alloc().expect("a new pool has every buffer free");
    ///
    /// let buffer = pool.get_mut(&key);
    /// assert_eq!(buffer.append(b"hello"), 5);
    ///
    /// // Only 3 bytes of capacity remain, so the rest is truncated.
    /// assert_eq!(buffer.append(b"world"), 3);
    /// assert_eq!(buffer.data(), b"hellowor");
    /// # pool.free(key);
    /// ```
    pub fn append(&mut self, data: &[u8]) -> usize {
        let write = data.len().min(self.remaining());

        let end = self
            .len
            .checked_add(write)
            .expect("write is bounded by the remaining capacity, so the sum cannot exceed BUFFER_SIZE");

        self.bytes
            .get_mut(self.len..end)
            .expect("the target range is bounded by BUFFER_SIZE")
            .copy_from_slice(data.get(..write).expect("write is at most data.len()"));

        self.len = end;

        write
    }
}

impl<const BUFFER_SIZE: usize> fmt::Debug for Buffer<BUFFER_SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &BUFFER_SIZE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_zeroed() {
        let buffer = Buffer::<8>::new();

        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.remaining(), 8);
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn append_advances_length() {
        let mut buffer = Buffer::<8>::new();

        assert_eq!(buffer.append(b"ab"), 2);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.remaining(), 6);

        assert_eq!(buffer.append(b"cd"), 2);
        assert_eq!(buffer.data(), b"abcd");
    }

    #[test]
    fn append_truncates_at_capacity() {
        let mut buffer = Buffer::<8>::new();
        buffer.append(b"hello");

        // 5 bytes used, 3 remain, so a 5 byte append writes only 3.
        assert_eq!(buffer.append(b"world"), 3);
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.remaining(), 0);
        assert_eq!(buffer.data(), b"hellowor");

        // A full buffer accepts appends but writes nothing.
        assert_eq!(buffer.append(b"!"), 0);
        assert_eq!(buffer.len(), 8);
    }

    #[test]
    fn append_empty_is_no_op() {
        let mut buffer = Buffer::<4>::new();

        assert_eq!(buffer.append(&[]), 0);
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn clear_resets_length_only() {
        let mut buffer = Buffer::<8>::new();
        buffer.append(b"data");

        buffer.clear();

        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.remaining(), 8);

        // Writes restart from offset zero.
        assert_eq!(buffer.append(b"x"), 1);
        assert_eq!(buffer.data(), b"x");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut buffer = Buffer::<4>::new();

        buffer.clear();
        assert_eq!(buffer.len(), 0);

        buffer.append(b"ab");
        buffer.clear();
        buffer.clear();
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn zero_capacity_buffer_truncates_everything() {
        let mut buffer = Buffer::<0>::new();

        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.remaining(), 0);
        assert_eq!(buffer.append(b"anything"), 0);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.data().is_empty());
    }
}
