//! Random-access editing on top of the writer.
//!
//! [`TextBuffer`] adds indexers, trimming, and find/replace to
//! [`TextWriter`]. Replace picks one of three strategies from the relative
//! needle/replacement lengths: an in-place overwrite when they match, a
//! forward compaction when the replacement is shorter, and a
//! snapshot-and-replay when it is longer.
//!
//! # Examples
//!
//! ```rust
//! use textforge::TextBuffer;
//!
//! let mut buf = TextBuffer::new();
//! buf.push_str("abcabc");
//! buf.replace("ab", "xyz");
//! assert_eq!(buf.to_string(), "xyzcxyzc");
//! ```

use core::{
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut, Range},
};

use crate::{pool, writer::TextWriter};

/// How characters are matched during [`TextBuffer::replace_using`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Characters must match exactly.
    #[default]
    Exact,
    /// ASCII letters match regardless of case.
    IgnoreAsciiCase,
}

impl Comparison {
    #[inline]
    fn chars_eq(self, a: char, b: char) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreAsciiCase => a.eq_ignore_ascii_case(&b),
        }
    }
}

/// First occurrence of `needle` in `haystack` at or after `from`.
fn find(haystack: &[char], from: usize, needle: &[char], cmp: Comparison) -> Option<usize> {
    let last = haystack.len().checked_sub(needle.len())?;
    (from..=last).find(|&at| {
        haystack[at..at + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&a, &b)| cmp.chars_eq(a, b))
    })
}

/// A writer with full random-access editing.
#[derive(Debug, Default)]
pub struct TextBuffer {
    writer: TextWriter,
}

impl TextBuffer {
    /// Creates an empty buffer with the pool's minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: TextWriter::new(),
        }
    }

    /// Creates an empty buffer with capacity of at least `min_capacity`.
    #[must_use]
    pub fn with_capacity(min_capacity: usize) -> Self {
        Self {
            writer: TextWriter::with_capacity(min_capacity),
        }
    }

    /// Overwrites `range` with `src`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds or `src.len()` differs from the
    /// range's length.
    pub fn set_range(&mut self, range: Range<usize>, src: &[char]) {
        assert!(
            src.len() == range.len(),
            "set_range source length {} does not match range length {}",
            src.len(),
            range.len()
        );
        self.writer.written_mut()[range].copy_from_slice(src);
    }

    /// Removes leading whitespace.
    pub fn trim_start(&mut self) {
        let leading = self
            .writer
            .written()
            .iter()
            .take_while(|ch| ch.is_whitespace())
            .count();
        if leading > 0 {
            self.writer.remove_first(leading);
        }
    }

    /// Removes trailing whitespace. A pure length adjustment.
    pub fn trim_end(&mut self) {
        let trailing = self
            .writer
            .written()
            .iter()
            .rev()
            .take_while(|ch| ch.is_whitespace())
            .count();
        if trailing > 0 {
            self.writer.remove_last(trailing);
        }
    }

    /// Swaps every occurrence of `old` for `new`, in place.
    pub fn replace_char(&mut self, old: char, new: char) {
        for ch in self.writer.written_mut() {
            if *ch == old {
                *ch = new;
            }
        }
    }

    /// Replaces every non-overlapping, left-to-right occurrence of `old`
    /// with `new`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty.
    pub fn replace(&mut self, old: &str, new: &str) {
        self.replace_using(old, new, Comparison::Exact);
    }

    /// [`replace`](Self::replace) with an explicit match mode.
    ///
    /// The search resumes strictly after each replacement, so the result is
    /// never re-scanned even when `new` contains `old`.
    ///
    /// # Panics
    ///
    /// Panics if `old` is empty.
    pub fn replace_using(&mut self, old: &str, new: &str, cmp: Comparison) {
        assert!(!old.is_empty(), "replace needle must not be empty");
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        match new.len().cmp(&old.len()) {
            core::cmp::Ordering::Equal => self.replace_swap(&old, &new, cmp),
            core::cmp::Ordering::Less => self.replace_shrink(&old, &new, cmp),
            core::cmp::Ordering::Greater => self.replace_expand(&old, &new, cmp),
        }
    }

    /// Equal lengths: overwrite each match where it stands.
    fn replace_swap(&mut self, old: &[char], new: &[char], cmp: Comparison) {
        let mut at = 0;
        while let Some(hit) = find(self.writer.written(), at, old, cmp) {
            self.writer.written_mut()[hit..hit + new.len()].copy_from_slice(new);
            at = hit + new.len();
        }
    }

    /// Shorter replacement: compact forward in place. The write cursor never
    /// passes the read cursor, so unscanned content stays intact.
    fn replace_shrink(&mut self, old: &[char], new: &[char], cmp: Comparison) {
        let mut read = 0;
        let mut write = 0;
        loop {
            match find(self.writer.written(), read, old, cmp) {
                Some(hit) => {
                    let keep = hit - read;
                    let written = self.writer.written_mut();
                    written.copy_within(read..hit, write);
                    written[write + keep..write + keep + new.len()].copy_from_slice(new);
                    write += keep + new.len();
                    read = hit + old.len();
                }
                None => {
                    let written = self.writer.written_mut();
                    let len = written.len();
                    written.copy_within(read..len, write);
                    let final_len = write + (len - read);
                    self.writer.set_len(final_len);
                    return;
                }
            }
        }
    }

    /// Longer replacement: snapshot the content into pooled scratch, reset,
    /// and replay retained segments interleaved with `new`. Growth is the
    /// writer's ordinary mechanism.
    fn replace_expand(&mut self, old: &[char], new: &[char], cmp: Comparison) {
        let len = self.writer.len();
        let mut scratch = pool::shared().rent(len);
        scratch[..len].copy_from_slice(self.writer.written());
        self.writer.clear();

        let snapshot = &scratch[..len];
        let mut read = 0;
        while let Some(hit) = find(snapshot, read, old, cmp) {
            self.writer.push_chars(&snapshot[read..hit]);
            self.writer.push_chars(new);
            read = hit + old.len();
        }
        self.writer.push_chars(&snapshot[read..]);

        pool::shared().recycle(scratch, false);
    }

    /// Materializes the written region and recycles the backing storage.
    #[must_use]
    pub fn into_string(self) -> String {
        self.writer.into_string()
    }
}

impl Deref for TextBuffer {
    type Target = TextWriter;

    fn deref(&self) -> &Self::Target {
        &self.writer
    }
}

impl DerefMut for TextBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.writer
    }
}

impl Index<usize> for TextBuffer {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.writer.written()[index]
    }
}

impl IndexMut<usize> for TextBuffer {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.writer.written_mut()[index]
    }
}

impl Index<Range<usize>> for TextBuffer {
    type Output = [char];

    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.writer.written()[range]
    }
}

impl IndexMut<Range<usize>> for TextBuffer {
    fn index_mut(&mut self, range: Range<usize>) -> &mut Self::Output {
        &mut self.writer.written_mut()[range]
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.writer, f)
    }
}
