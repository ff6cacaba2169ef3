//! Indentation-aware writing.
//!
//! [`IndentBuilder`] keeps a stack of indent strings and re-emits the whole
//! stack, outer to inner, after every newline. There is no persisted
//! "at line start" flag: indentation is re-derived from the stack each time,
//! which is why multi-line text is split on the newline sequence *before*
//! writing, so every embedded line break routes through [`newline`]
//! (and picks up the current indentation) instead of landing raw.
//!
//! [`newline`]: IndentBuilder::newline
//!
//! # Examples
//!
//! ```rust
//! use textforge::IndentBuilder;
//!
//! let mut b = IndentBuilder::new();
//! b.write("fn main() {");
//! b.indented("    ", |b| {
//!     b.newline();
//!     b.write("let x = 1;\nlet y = 2;");
//! });
//! b.newline();
//! b.write("}");
//! assert_eq!(
//!     b.to_string(),
//!     "fn main() {\n    let x = 1;\n    let y = 2;\n}"
//! );
//! ```

use core::fmt;

use crate::builder::TextBuilder;

/// A builder that interleaves the current indent stack into every line.
#[derive(Debug)]
pub struct IndentBuilder {
    builder: TextBuilder,
    indents: Vec<String>,
    newline: String,
}

impl IndentBuilder {
    /// Creates an empty builder using `"\n"` as the newline sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: TextBuilder::new(),
            indents: Vec::new(),
            newline: "\n".into(),
        }
    }

    /// Creates an empty builder with a custom newline sequence.
    ///
    /// # Panics
    ///
    /// Panics if `newline` is empty.
    #[must_use]
    pub fn with_newline(newline: impl Into<String>) -> Self {
        let newline = newline.into();
        assert!(!newline.is_empty(), "newline sequence must not be empty");
        Self {
            builder: TextBuilder::new(),
            indents: Vec::new(),
            newline,
        }
    }

    /// Current depth of the indent stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.indents.len()
    }

    /// Writes the newline sequence followed by the entire indent stack,
    /// outer to inner.
    pub fn newline(&mut self) -> &mut Self {
        self.builder.append(self.newline.as_str());
        for indent in &self.indents {
            self.builder.append(indent.as_str());
        }
        self
    }

    /// Writes `text`, splitting it on the newline sequence first so every
    /// embedded line break becomes an indented [`newline`](Self::newline).
    pub fn write(&mut self, text: &str) -> &mut Self {
        // Split up front: each segment is free of the newline sequence.
        let segments: Vec<&str> = text.split(self.newline.as_str()).collect();
        for (nth, segment) in segments.into_iter().enumerate() {
            if nth > 0 {
                self.newline();
            }
            self.builder.append(segment);
        }
        self
    }

    /// Writes a single character; a character equal to a single-character
    /// newline sequence routes through [`newline`](Self::newline).
    ///
    /// A multi-character sequence (such as `"\r\n"`) cannot be completed
    /// one character at a time, so its characters pass through verbatim;
    /// write such sequences through [`write`](Self::write) instead.
    pub fn write_char(&mut self, ch: char) -> &mut Self {
        let mut scratch = [0u8; 4];
        if self.newline == *ch.encode_utf8(&mut scratch) {
            self.newline()
        } else {
            self.builder.append(ch);
            self
        }
    }

    /// Writes `text` and ends the line.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.write(text).newline()
    }

    /// Pushes `indent`, runs `scope`, and pops on every exit path: normal
    /// return, early return inside `scope`, or an unwinding panic.
    pub fn indented<F>(&mut self, indent: impl Into<String>, scope: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.indents.push(indent.into());
        {
            let mut guard = PopOnDrop {
                builder: &mut *self,
            };
            scope(&mut *guard.builder);
        }
        self
    }

    /// Materializes the built text and recycles the backing storage.
    #[must_use]
    pub fn into_string(self) -> String {
        self.builder.into_string()
    }
}

/// Pops one indent level when dropped, so an unwind out of
/// [`IndentBuilder::indented`] cannot leak the pushed level.
struct PopOnDrop<'a> {
    builder: &'a mut IndentBuilder,
}

impl Drop for PopOnDrop<'_> {
    fn drop(&mut self) {
        self.builder.indents.pop();
    }
}

impl Default for IndentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IndentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.builder, f)
    }
}
