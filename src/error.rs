use crate::atomic::Atomic;
use std::borrow::Cow;
use thiserror::Error;

/// Structured parse failure carrying expected-vs-found information and the
/// offset at which the input was rejected
///
/// Rendering is deliberately one line per error. Callers own the source
/// text and can slice around [`offset`](ParseError::offset) themselves if
/// they want richer diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError<T: Atomic> {
    /// Tried to read past the end of the input
    #[error("unexpected end of input at offset {offset}")]
    EndOfInput { offset: usize },

    /// A predicate or literal rejected the element at the current position
    #[error("{expected}, found '{found}' at offset {offset}")]
    UnexpectedElement {
        expected: Cow<'static, str>,
        found: T,
        offset: usize,
    },

    /// End-of-input was required before the input actually ended
    #[error("expected end of input, found '{found}' at offset {offset}")]
    TrailingInput { found: T, offset: usize },
}

impl<T: Atomic> ParseError<T> {
    /// Returns the offset into the source where this error occurred
    pub fn offset(&self) -> usize {
        match self {
            ParseError::EndOfInput { offset } => *offset,
            ParseError::UnexpectedElement { offset, .. } => *offset,
            ParseError::TrailingInput { offset, .. } => *offset,
        }
    }
}
