use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::span::Span;

/// Parser combinator that turns failure into an empty span
///
/// The wrapped parser is attempted; when it fails, the cursor is rewound
/// to where it was and the empty span at that position is returned as a
/// success. Never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, T, C, P> Parser<'src> for Optional<P>
where
    T: Atomic + 'src,
    C: Cursor<'src, Element = T>,
    P: Parser<'src, Cursor = C, Output = Span<'src, T>>,
{
    type Cursor = C;
    type Output = Span<'src, T>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut C) -> Result<Self::Output, Self::Error> {
        let snapshot = cursor.snapshot();
        match self.parser.parse(cursor) {
            Ok(span) => Ok(span),
            Err(_) => {
                cursor.restore(snapshot);
                Ok(Span::empty(cursor.source(), cursor.position()))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P> {
    Optional::new(parser)
}
