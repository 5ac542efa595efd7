use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::SliceCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use std::marker::PhantomData;

/// Parser that succeeds with an empty span only at the end of the input
///
/// Anywhere else it fails with a trailing-input error and the cursor does
/// not move.
pub struct Eof<T> {
    _marker: PhantomData<T>,
}

impl<'src, T: Atomic + 'src> Parser<'src> for Eof<T> {
    type Cursor = SliceCursor<'src, T>;
    type Output = Span<'src, T>;
    type Error = ParseError<T>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        match cursor.peek() {
            Err(_) => Ok(Span::empty(cursor.source(), cursor.position())),
            Ok(found) => Err(ParseError::TrailingInput {
                found,
                offset: cursor.position(),
            }),
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof<T: Atomic>() -> Eof<T> {
    Eof {
        _marker: PhantomData,
    }
}
