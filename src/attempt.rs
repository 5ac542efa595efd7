use crate::cursor::Cursor;
use crate::parser::Parser;

/// Backtracking wrapper: commit on success, rewind on failure
///
/// The wrapped parser runs on the caller's cursor, so a success leaves the
/// cursor advanced exactly as if the parser had run bare. On failure the
/// snapshot taken on entry is restored before the failure is re-raised,
/// whether the failure was raised by the wrapped parser itself or deep
/// inside a nested combinator. Running the parser on a throwaway copy and
/// discarding it would lose the advancement of successful parses, which is
/// why the commit path must be the caller's own cursor.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'src, P> Parser<'src> for Attempt<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        let snapshot = cursor.snapshot();
        match self.parser.parse(cursor) {
            Ok(value) => Ok(value),
            Err(error) => {
                cursor.restore(snapshot);
                Err(error)
            }
        }
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'src, P>(parser: P) -> Attempt<P>
where
    P: Parser<'src>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'src>: Parser<'src> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'src, P> AttemptExt<'src> for P where P: Parser<'src> {}
