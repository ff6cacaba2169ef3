//! Pooled, growable text buffers with fluent and indent-aware builders.
//!
//! The layers, leaf to root:
//!
//! - [`BufferPool`] rents and recycles the character arrays backing
//!   everything else.
//! - [`TextWriter`] owns one such array and appends, allocates holes at
//!   arbitrary positions, and removes ranges, growing geometrically.
//! - [`TextBuffer`] adds random-access editing: indexers, trimming, and a
//!   three-strategy find/replace.
//! - [`TextBuilder`] is the chainable surface: typed appends via
//!   [`SpanFormat`], width alignment, a `{index[:format]}` composite format
//!   mini-language, and structural helpers.
//! - [`IndentBuilder`] re-emits a maintained indent stack after every
//!   newline, splitting multi-line writes so indentation reaches every line.
//!
//! ```rust
//! use textforge::TextBuilder;
//!
//! let mut b = TextBuilder::new();
//! b.separated(", ", ["one", "two", "three"], |b, word| {
//!     b.append(word);
//! });
//! assert_eq!(b.into_string(), "one, two, three");
//! ```

mod align;
mod buffer;
mod builder;
mod error;
mod indent;
mod pool;
mod span_format;
mod template;
mod writer;

#[cfg(test)]
mod tests;

pub use align::Alignment;
pub use buffer::{Comparison, TextBuffer};
pub use builder::TextBuilder;
pub use error::{FormatError, FormatErrorKind};
pub use indent::IndentBuilder;
pub use pool::BufferPool;
pub use span_format::{SpanFormat, SpanFormatError};
pub use writer::TextWriter;
