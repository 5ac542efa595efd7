use crate::cursor::Cursor;
use std::error::Error;

/// Core parser trait for parser combinators
///
/// A parser borrows a cursor mutably for the duration of one parse. On
/// success the cursor has advanced past everything the parser consumed.
/// On failure the cursor is left wherever the failing parse stopped:
/// which positions a failure may leave behind is part of each combinator's
/// contract, and rewinding is owned by the combinators that promise it
/// (`attempt`, `or`, `optional`, `many`, `some`), never by `then` or
/// `replicate`.
pub trait Parser<'src> {
    /// The cursor type this parser reads from
    type Cursor: Cursor<'src>;

    /// The value produced on success
    type Output;

    /// The failure raised on rejection
    type Error: Error;

    /// Attempt to parse at the cursor's current position
    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error>;
}

/// Boxed parsers forward to the boxed implementation
///
/// This is what lets a self-referential grammar erase its otherwise
/// infinitely recursive concrete type; see [`BoxedParser`].
impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, the return type for recursive grammar definitions
pub type BoxedParser<'src, C, O, E> = Box<dyn Parser<'src, Cursor = C, Output = O, Error = E> + 'src>;

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::parser::{BoxedParser, Parser};
    use crate::satisfy::element;
    use crate::{ParseError, Span};

    #[test]
    fn test_boxed_parser_forwards() {
        let data = b"ab";
        let mut cursor = ByteCursor::new(data);
        let parser: BoxedParser<ByteCursor, Span<u8>, ParseError<u8>> = Box::new(element(b'a'));

        let span = parser.parse(&mut cursor).unwrap();
        assert_eq!(span.as_string(), "a");
        assert_eq!(cursor.position(), 1);
    }
}
