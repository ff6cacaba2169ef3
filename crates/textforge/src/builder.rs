//! The fluent builder: chainable appends, alignment, composite formatting,
//! and structural helpers over a [`TextBuffer`].
//!
//! Every mutator returns `&mut Self`, so builds compose as one expression:
//!
//! ```rust
//! use textforge::TextBuilder;
//!
//! let mut b = TextBuilder::new();
//! let text = b
//!     .append("Hello")
//!     .append(", ")
//!     .append("World")
//!     .append('!')
//!     .to_string();
//! assert_eq!(text, "Hello, World!");
//! ```

use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{
    align::{Alignment, pad_split},
    buffer::TextBuffer,
    error::FormatError,
    span_format::SpanFormat,
    template,
};

/// Per-hole size guess used by [`TextBuilder::with_hints`] to pre-size the
/// buffer for interpolation-style use.
const FORMATTED_SIZE_GUESS: usize = 16;

/// A chainable text builder over pooled storage.
///
/// Dereferences to [`TextBuffer`] (and through it to
/// [`TextWriter`](crate::TextWriter)), so editing operations remain
/// available mid-chain.
#[derive(Debug, Default)]
pub struct TextBuilder {
    buffer: TextBuffer,
}

impl TextBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
        }
    }

    /// Creates a builder with capacity of at least `min_capacity`.
    #[must_use]
    pub fn with_capacity(min_capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(min_capacity),
        }
    }

    /// Creates a builder sized for `literal_len` literal characters plus
    /// `formatted_count` formatted values, the heuristic that keeps
    /// interpolation-style builds from reallocating early.
    #[must_use]
    pub fn with_hints(literal_len: usize, formatted_count: usize) -> Self {
        let guess = literal_len.saturating_add(formatted_count.saturating_mul(FORMATTED_SIZE_GUESS));
        Self::with_capacity(guess)
    }

    // --------------------------------------------------------------------------------------------
    // Appends
    // --------------------------------------------------------------------------------------------

    /// Appends any [`SpanFormat`] value.
    pub fn append<T: SpanFormat>(&mut self, value: T) -> &mut Self {
        // A `None` spec is accepted by every `SpanFormat` impl.
        let _ = self.buffer.format(&value, None);
        self
    }

    /// Appends any `Display` value, the fallback for types without a
    /// [`SpanFormat`] implementation.
    pub fn append_display<T: fmt::Display + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.buffer.format_display(value);
        self
    }

    /// Appends a value rendered with an explicit format spec.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if `value` rejects `spec`.
    pub fn append_formatted<T: SpanFormat>(
        &mut self,
        value: T,
        spec: &str,
    ) -> Result<&mut Self, FormatError> {
        self.buffer
            .format(&value, Some(spec))
            .map_err(|_| FormatError::unsupported_spec(spec))?;
        Ok(self)
    }

    /// Appends `value` followed by a newline.
    pub fn append_line<T: SpanFormat>(&mut self, value: T) -> &mut Self {
        self.append(value).newline()
    }

    /// Appends a newline.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    // --------------------------------------------------------------------------------------------
    // Alignment
    // --------------------------------------------------------------------------------------------

    /// Appends `text` space-padded to exactly `width` characters.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `width`.
    pub fn align(&mut self, text: &str, width: usize, alignment: Alignment) -> &mut Self {
        let content = text.chars().count();
        assert!(
            content <= width,
            "align content ({content} chars) exceeds field width ({width})"
        );
        let (front, back) = pad_split(alignment, width - content);
        let dest = self.buffer.allocate(width);
        dest[..front].fill(' ');
        for (slot, ch) in dest[front..front + content].iter_mut().zip(text.chars()) {
            *slot = ch;
        }
        dest[width - back..].fill(' ');
        self
    }

    /// Appends a single character space-padded to exactly `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn align_char(&mut self, ch: char, width: usize, alignment: Alignment) -> &mut Self {
        assert!(width >= 1, "align_char field width must be at least 1");
        let (front, back) = pad_split(alignment, width - 1);
        let dest = self.buffer.allocate(width);
        dest[..front].fill(' ');
        dest[front] = ch;
        dest[width - back..].fill(' ');
        self
    }

    // --------------------------------------------------------------------------------------------
    // Composite formatting
    // --------------------------------------------------------------------------------------------

    /// Appends `template` with its `{index}` / `{index:spec}` holes filled
    /// from `args`. Doubled braces escape literals; alignment syntax
    /// (`{index,align}`) is rejected.
    ///
    /// ```rust
    /// use textforge::TextBuilder;
    ///
    /// let mut b = TextBuilder::new();
    /// b.format("{0} is {1:00}", &[&"age", &7]).unwrap();
    /// assert_eq!(b.to_string(), "age is 07");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] carrying the offset and surrounding text of
    /// any malformed hole, out-of-range index, or rejected spec.
    pub fn format(
        &mut self,
        template: &str,
        args: &[&dyn SpanFormat],
    ) -> Result<&mut Self, FormatError> {
        template::format_into(&mut self.buffer, template, args)?;
        Ok(self)
    }

    // --------------------------------------------------------------------------------------------
    // Structure
    // --------------------------------------------------------------------------------------------

    /// Runs `each` for every item.
    pub fn enumerate<I, F>(&mut self, items: I, mut each: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        for item in items {
            each(self, item);
        }
        self
    }

    /// Runs `each` for every item along with its position.
    pub fn iterate<I, F>(&mut self, items: I, mut each: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, usize, I::Item),
    {
        for (index, item) in items.into_iter().enumerate() {
            each(self, index, item);
        }
        self
    }

    /// Runs `each` for every item, invoking `separator` between consecutive
    /// items. No trailing separator.
    pub fn delimit<I, S, F>(&mut self, mut separator: S, items: I, mut each: F) -> &mut Self
    where
        I: IntoIterator,
        S: FnMut(&mut Self),
        F: FnMut(&mut Self, I::Item),
    {
        let mut first = true;
        for item in items {
            if !first {
                separator(self);
            }
            each(self, item);
            first = false;
        }
        self
    }

    /// [`delimit`](Self::delimit) with a plain string separator.
    pub fn separated<I, F>(&mut self, separator: &str, items: I, each: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        self.delimit(
            |builder| {
                builder.append(separator);
            },
            items,
            each,
        )
    }

    /// Runs `then` only if `condition` holds.
    pub fn when<F: FnOnce(&mut Self)>(&mut self, condition: bool, then: F) -> &mut Self {
        if condition {
            then(self);
        }
        self
    }

    /// Runs exactly one of the two branches.
    pub fn when_else<F, G>(&mut self, condition: bool, then: F, otherwise: G) -> &mut Self
    where
        F: FnOnce(&mut Self),
        G: FnOnce(&mut Self),
    {
        if condition {
            then(self);
        } else {
            otherwise(self);
        }
        self
    }

    /// Runs a nested build and returns the span of exactly what it wrote.
    pub fn get_written<F: FnOnce(&mut Self)>(&mut self, build: F) -> &[char] {
        let start = self.buffer.len();
        build(self);
        let end = self.buffer.len();
        &self.buffer.written()[start..end]
    }

    /// Materializes the built text and recycles the backing storage.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer.written().iter().collect()
    }
}

impl Deref for TextBuilder {
    type Target = TextBuffer;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl DerefMut for TextBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl fmt::Display for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.buffer, f)
    }
}
