//! Character-level convenience parsers for cursors over decoded text

use crate::cursor::Cursor;
use crate::cursors::CharCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};
use crate::span::Span;
use std::borrow::Cow;

/// Parser for a single decimal digit
pub fn digit() -> Satisfy<impl Fn(&char) -> bool, char> {
    satisfy(|c: &char| c.is_ascii_digit(), "expected digit")
}

/// Parser for a single letter, in the Unicode sense
pub fn letter() -> Satisfy<impl Fn(&char) -> bool, char> {
    satisfy(|c: &char| c.is_alphabetic(), "expected letter")
}

/// Parser for a single whitespace character, in the Unicode sense
pub fn whitespace() -> Satisfy<impl Fn(&char) -> bool, char> {
    satisfy(|c: &char| c.is_whitespace(), "expected whitespace")
}

/// Parser that matches an exact string character by character
///
/// Same consumption behavior as [`literal`](crate::literal::literal): a
/// mismatch midway leaves the cursor after the matched prefix.
pub struct Literal {
    expected: Cow<'static, str>,
}

impl<'src> Parser<'src> for Literal {
    type Cursor = CharCursor<'src>;
    type Output = Span<'src, char>;
    type Error = ParseError<char>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        let start = cursor.position();

        for expected in self.expected.chars() {
            let found = cursor.peek()?;
            if found == expected {
                cursor.advance();
            } else {
                return Err(ParseError::UnexpectedElement {
                    expected: format!(
                        "expected '{}' while matching \"{}\"",
                        expected, self.expected
                    )
                    .into(),
                    found,
                    offset: cursor.position(),
                });
            }
        }

        Ok(Span::new(cursor.source(), start, cursor.position()))
    }
}

/// Convenience function to create a string Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal {
        expected: expected.into(),
    }
}
