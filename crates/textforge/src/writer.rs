//! The growable text writer underlying every buffer and builder.
//!
//! A [`TextWriter`] owns a pooled character array and a logical length. The
//! prefix `[0, len)` is the written region, the only part holding meaningful
//! data; `[len, capacity)` is available for new writes. Appends grow the
//! array geometrically (at least doubling) and block-copy the written prefix
//! across; the old array goes back to the pool.
//!
//! # Examples
//!
//! ```rust
//! use textforge::TextWriter;
//!
//! let mut w = TextWriter::new();
//! w.push_str("he");
//! w.push('l');
//! w.push_chars(&['l', 'o']);
//! assert_eq!(w.to_string(), "hello");
//! ```

use core::fmt::{self, Write as _};

use crate::{
    pool::{self, MAX_CAPACITY},
    span_format::{SpanFormat, SpanFormatError},
};

/// Fixed minimum increment for the format retry loop. Each retry grows
/// capacity by at least this much, so the loop strictly progresses.
const FORMAT_GROW_STEP: usize = 16;

/// An append-oriented, growable character sequence over pooled storage.
///
/// Dropping the writer returns its backing array to the shared pool;
/// [`into_string`](Self::into_string) materializes the written region first.
pub struct TextWriter {
    /// Backing store; fully initialized, `buf.len()` is the capacity.
    buf: Vec<char>,
    /// Chars in use. Invariant: `len <= buf.len()`.
    len: usize,
}

impl TextWriter {
    /// Creates a writer with the pool's minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a writer whose initial capacity is at least `min_capacity`.
    #[must_use]
    pub fn with_capacity(min_capacity: usize) -> Self {
        Self {
            buf: pool::shared().rent(min_capacity),
            len: 0,
        }
    }

    /// Number of characters written so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if nothing has been written.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the backing array.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Free characters remaining before the next growth.
    #[must_use]
    #[inline]
    pub fn available(&self) -> usize {
        self.buf.len() - self.len
    }

    /// The written region.
    #[must_use]
    #[inline]
    pub fn written(&self) -> &[char] {
        &self.buf[..self.len]
    }

    /// The written region, mutably.
    #[inline]
    pub fn written_mut(&mut self) -> &mut [char] {
        &mut self.buf[..self.len]
    }

    /// Sets the logical length directly, clamped to `[0, capacity]`.
    ///
    /// Extending the length exposes previously written (or unspecified)
    /// characters; callers are responsible for their meaning.
    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(self.buf.len());
    }

    /// Resets the logical length to zero without releasing the backing array.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    // --------------------------------------------------------------------------------------------
    // Growth
    // --------------------------------------------------------------------------------------------

    fn grow_to(&mut self, needed: usize) {
        assert!(
            needed <= MAX_CAPACITY,
            "text buffer capacity overflow ({needed} chars)"
        );
        let new_capacity = needed
            .max(self.buf.len().saturating_mul(2))
            .min(MAX_CAPACITY);
        let mut fresh = pool::shared().rent(new_capacity);
        fresh[..self.len].copy_from_slice(&self.buf[..self.len]);
        let old = core::mem::replace(&mut self.buf, fresh);
        pool::shared().recycle(old, false);
    }

    /// Ensures room for `additional` more characters.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds the platform limit.
    pub fn reserve(&mut self, additional: usize) {
        let Some(needed) = self.len.checked_add(additional) else {
            panic!("text buffer capacity overflow")
        };
        if needed > self.buf.len() {
            self.grow_to(needed);
        }
    }

    // --------------------------------------------------------------------------------------------
    // Appending
    // --------------------------------------------------------------------------------------------

    /// Appends a single character.
    #[inline]
    pub fn push(&mut self, ch: char) {
        self.reserve(1);
        self.buf[self.len] = ch;
        self.len += 1;
    }

    /// Appends a character slice.
    pub fn push_chars(&mut self, chars: &[char]) {
        self.reserve(chars.len());
        self.buf[self.len..self.len + chars.len()].copy_from_slice(chars);
        self.len += chars.len();
    }

    /// Appends a string slice.
    pub fn push_str(&mut self, text: &str) {
        // Byte length is an upper bound on the char count
        self.reserve(text.len());
        for ch in text.chars() {
            self.buf[self.len] = ch;
            self.len += 1;
        }
    }

    /// Formats `value` directly into the available region.
    ///
    /// On insufficient space the writer grows by a fixed minimum increment
    /// and retries; each retry strictly increases capacity, so the loop
    /// terminates (or dies on capacity overflow, never truncating).
    ///
    /// # Errors
    ///
    /// Returns [`SpanFormatError::Unsupported`] if `value` rejects `spec`.
    /// A `None` spec is accepted by every implementation.
    pub fn format<T>(&mut self, value: &T, spec: Option<&str>) -> Result<(), SpanFormatError>
    where
        T: SpanFormat + ?Sized,
    {
        loop {
            match value.try_format(&mut self.buf[self.len..], spec) {
                Ok(written) => {
                    self.len += written;
                    return Ok(());
                }
                Err(SpanFormatError::Insufficient) => {
                    let capacity = self.buf.len();
                    self.grow_to(capacity.saturating_add(FORMAT_GROW_STEP));
                }
                Err(SpanFormatError::Unsupported) => return Err(SpanFormatError::Unsupported),
            }
        }
    }

    /// Appends any `Display` value through the writer's `fmt::Write` impl,
    /// the fallback for types without a [`SpanFormat`] implementation.
    pub fn format_display<T: fmt::Display + ?Sized>(&mut self, value: &T) {
        // Our `write_str` never errors.
        let _ = fmt::Write::write_fmt(self, format_args!("{value}"));
    }

    // --------------------------------------------------------------------------------------------
    // Allocation and removal
    // --------------------------------------------------------------------------------------------

    /// Reserves `len` characters at the end of the written region and
    /// returns the reserved hole for the caller to fill.
    ///
    /// The logical length increases immediately; callers must fill the
    /// entire hole to keep the written region meaningful.
    pub fn allocate(&mut self, len: usize) -> &mut [char] {
        self.reserve(len);
        let start = self.len;
        self.len += len;
        &mut self.buf[start..self.len]
    }

    /// Reserves a single character at the end of the written region.
    pub fn allocate_one(&mut self) -> &mut char {
        &mut self.allocate(1)[0]
    }

    /// Reserves `len` characters at `index`, shifting `[index, len())` right
    /// to make room, and returns the hole.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn allocate_at(&mut self, index: usize, len: usize) -> &mut [char] {
        assert!(
            index <= self.len,
            "allocate_at index {index} out of bounds (length {})",
            self.len
        );
        self.reserve(len);
        self.buf.copy_within(index..self.len, index + len);
        self.len += len;
        &mut self.buf[index..index + len]
    }

    /// Removes `len` characters starting at `index`, closing the gap.
    ///
    /// # Panics
    ///
    /// Panics if `index + len > len()`.
    pub fn remove(&mut self, index: usize, len: usize) {
        let Some(end) = index.checked_add(len) else {
            panic!("remove range overflows")
        };
        assert!(
            end <= self.len,
            "remove range {index}..{end} out of bounds (length {})",
            self.len
        );
        self.buf.copy_within(end..self.len, index);
        self.len -= len;
    }

    /// Removes the first `len` characters.
    ///
    /// # Panics
    ///
    /// Panics if `len > len()`.
    pub fn remove_first(&mut self, len: usize) {
        self.remove(0, len);
    }

    /// Removes the last `len` characters. A pure length decrement.
    ///
    /// # Panics
    ///
    /// Panics if `len > len()`.
    pub fn remove_last(&mut self, len: usize) {
        assert!(
            len <= self.len,
            "remove_last length {len} out of bounds (length {})",
            self.len
        );
        self.len -= len;
    }

    // --------------------------------------------------------------------------------------------
    // Materialization
    // --------------------------------------------------------------------------------------------

    /// Materializes the written region and recycles the backing array.
    #[must_use]
    pub fn into_string(self) -> String {
        // Drop returns the buffer to the pool.
        self.written().iter().collect()
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TextWriter {
    fn drop(&mut self) {
        let buf = core::mem::take(&mut self.buf);
        pool::shared().recycle(buf, false);
    }
}

impl fmt::Write for TextWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(c);
        Ok(())
    }
}

impl fmt::Display for TextWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in self.written() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextWriter")
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .field("written", &self.to_string())
            .finish()
    }
}
