use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::SliceCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;

/// Parser that matches an exact sequence of elements
///
/// Equivalent to folding single-element matches together with `then`: a
/// mismatch midway fails with the cursor left after the matched prefix.
/// Wrap in `attempt` when a partial match must not consume.
pub struct Literal<T: 'static> {
    expected: &'static [T],
}

impl<'src, T: Atomic + 'static> Parser<'src> for Literal<T> {
    type Cursor = SliceCursor<'src, T>;
    type Output = Span<'src, T>;
    type Error = ParseError<T>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        let start = cursor.position();

        for &expected in self.expected {
            let found = cursor.peek()?;
            if found == expected {
                cursor.advance();
            } else {
                return Err(ParseError::UnexpectedElement {
                    expected: format!(
                        "expected '{}' while matching \"{}\"",
                        expected,
                        T::format_slice(self.expected)
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

/// Convenience function to create a Literal parser
pub fn literal<T>(expected: &'static [T]) -> Literal<T> {
    Literal { expected }
}
