//! Errors reported by the composite format-string parser.

use thiserror::Error;

/// Radius, in characters, of the context window captured around an error.
const CONTEXT_RADIUS: usize = 12;

/// A malformed composite format string or a hole its arguments cannot
/// satisfy.
///
/// Carries the character offset of the problem and a window of the
/// surrounding template text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset} (near {context:?})")]
pub struct FormatError {
    kind: FormatErrorKind,
    offset: usize,
    context: String,
}

impl FormatError {
    pub(crate) fn new(kind: FormatErrorKind, template: &[char], offset: usize) -> Self {
        let start = offset.saturating_sub(CONTEXT_RADIUS);
        let end = (offset + CONTEXT_RADIUS).min(template.len());
        Self {
            kind,
            offset,
            context: template[start..end].iter().collect(),
        }
    }

    pub(crate) fn unsupported_spec(spec: &str) -> Self {
        Self {
            kind: FormatErrorKind::UnsupportedSpec { spec: spec.into() },
            offset: 0,
            context: spec.into(),
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }

    /// Character offset of the problem within the template.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Template text surrounding the offset.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Classification of format-string failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatErrorKind {
    /// A `{` hole was opened but the template ended before its `}`.
    #[error("unterminated format hole")]
    UnterminatedHole,
    /// A hole opened without any decimal argument index.
    #[error("format hole is missing an argument index")]
    MissingIndex,
    /// Something other than a digit, `:` or `}` followed the index.
    #[error("unexpected character {found:?} in format hole")]
    InvalidIndex {
        /// The offending character.
        found: char,
    },
    /// `{index,alignment}` syntax, which this mini-language rejects.
    #[error("alignment syntax ({{index,alignment}}) is not supported")]
    AlignmentUnsupported,
    /// A `{` inside a hole's format text.
    #[error("nested brace inside a format hole")]
    NestedBrace,
    /// A `}` with no open hole and no doubled escape.
    #[error("unmatched closing brace")]
    UnmatchedBrace,
    /// The hole references an argument that was not supplied.
    #[error("format argument index {index} out of range ({count} arguments supplied)")]
    IndexOutOfRange {
        /// Index the hole asked for.
        index: usize,
        /// Number of arguments supplied.
        count: usize,
    },
    /// The argument exists but rejected the hole's format text.
    #[error("format spec {spec:?} is not supported by the argument")]
    UnsupportedSpec {
        /// The rejected format text.
        spec: String,
    },
}
