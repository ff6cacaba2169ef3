//! Pooling of the character arrays that back every writer and builder.
//!
//! Buffers are plain `Vec<char>`s kept fully initialized, so a rented buffer
//! can be sliced anywhere within its capacity without further bookkeeping.
//! The pool itself is a fixed set of candidate slots behind a lock-free
//! queue: a rent or recycle claims or releases a slot atomically and never
//! blocks. When every slot is occupied, a recycled buffer is simply dropped.

use std::sync::LazyLock;

use crossbeam_queue::ArrayQueue;

/// Smallest capacity the pool will hand out or retain.
pub(crate) const MIN_BUFFER_CAPACITY: usize = 64;

/// Upper bound on a single buffer's capacity. Growing past this is a fatal
/// capacity overflow, never a silent truncation.
pub(crate) const MAX_CAPACITY: usize = isize::MAX as usize / size_of::<char>();

const POOL_SLOTS: usize = 8;

const BLANK: char = '\0';

/// A bounded, thread-safe pool of reusable `char` buffers.
///
/// One logical owner holds a rented buffer at a time; returning the same
/// buffer twice or using it after recycling is a caller bug the pool does not
/// detect. Concurrent [`rent`](Self::rent) and [`recycle`](Self::recycle)
/// calls from multiple threads are safe.
#[derive(Debug)]
pub struct BufferPool {
    slots: ArrayQueue<Vec<char>>,
}

impl BufferPool {
    /// Creates an empty pool with the default slot count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: ArrayQueue::new(POOL_SLOTS),
        }
    }

    /// Rents a buffer with `len() >= min_capacity`.
    ///
    /// Contents of a rented buffer are unspecified; callers must not read a
    /// position before writing it.
    ///
    /// # Panics
    ///
    /// Panics if `min_capacity` exceeds the platform capacity limit.
    #[must_use]
    pub fn rent(&self, min_capacity: usize) -> Vec<char> {
        assert!(
            min_capacity <= MAX_CAPACITY,
            "requested buffer capacity overflow ({min_capacity} chars)"
        );
        let min_capacity = min_capacity.max(MIN_BUFFER_CAPACITY);

        // Fast path: claim the first candidate slot; on a size mismatch put
        // the buffer back and scan the remaining slots, bounded by the slot
        // count so concurrent churn cannot loop us forever.
        for _ in 0..POOL_SLOTS {
            match self.slots.pop() {
                Some(buf) if buf.len() >= min_capacity => return buf,
                Some(buf) => {
                    let _ = self.slots.push(buf);
                }
                None => break,
            }
        }

        vec![BLANK; min_capacity]
    }

    /// Makes `buf` eligible for future rents.
    ///
    /// With `clear` set the buffer is blanked first. If no slot is free the
    /// buffer is dropped.
    pub fn recycle(&self, mut buf: Vec<char>, clear: bool) {
        if buf.len() < MIN_BUFFER_CAPACITY {
            return;
        }
        if clear {
            buf.fill(BLANK);
        }
        // Full queue: discard, the allocator reclaims it.
        let _ = self.slots.push(buf);
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: LazyLock<BufferPool> = LazyLock::new(BufferPool::new);

/// The process-global pool backing [`TextWriter`](crate::TextWriter) and the
/// builders layered on it.
pub(crate) fn shared() -> &'static BufferPool {
    &SHARED
}
