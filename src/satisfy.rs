use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::SliceCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::span::Span;
use std::borrow::Cow;
use std::marker::PhantomData;

/// The leaf primitive: parse a single element accepted by a predicate
///
/// On success the cursor advances by one and the one-element span is
/// returned. On rejection the cursor does not move at all, so `satisfy`
/// (and everything built directly from it) is atomic without an enclosing
/// `attempt`.
pub struct Satisfy<F, T = u8> {
    predicate: F,
    expectation: Cow<'static, str>,
    _marker: PhantomData<T>,
}

impl<'src, T, F> Parser<'src> for Satisfy<F, T>
where
    T: Atomic + 'src,
    F: Fn(&T) -> bool,
{
    type Cursor = SliceCursor<'src, T>;
    type Output = Span<'src, T>;
    type Error = ParseError<T>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        let found = cursor.peek()?;
        if (self.predicate)(&found) {
            let start = cursor.position();
            cursor.advance();
            Ok(Span::new(cursor.source(), start, cursor.position()))
        } else {
            Err(ParseError::UnexpectedElement {
                expected: self.expectation.clone(),
                found,
                offset: cursor.position(),
            })
        }
    }
}

/// Convenience function to create a Satisfy parser
///
/// The expectation string names what the predicate accepts and becomes the
/// `expected` half of the rejection error.
pub fn satisfy<T, F>(predicate: F, expectation: impl Into<Cow<'static, str>>) -> Satisfy<F, T>
where
    F: Fn(&T) -> bool,
{
    Satisfy {
        predicate,
        expectation: expectation.into(),
        _marker: PhantomData,
    }
}

/// Parser that accepts any single element
pub fn any_element<T: Atomic>() -> Satisfy<impl Fn(&T) -> bool, T> {
    satisfy(|_: &T| true, "expected any element")
}

/// Parser that matches one specific element
pub fn element<T: Atomic>(expected: T) -> Satisfy<impl Fn(&T) -> bool, T> {
    satisfy(
        move |found: &T| *found == expected,
        format!("expected '{expected}'"),
    )
}
