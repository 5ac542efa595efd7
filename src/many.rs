use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::span::Span;

/// Parser combinator that matches zero or more occurrences of the given
/// parser and returns the covering span
///
/// Every iteration runs with attempt semantics: when an application fails,
/// the cursor is rewound to the end of the last success, so the position
/// always lands on a fully-matched boundary. That per-iteration rewind is
/// part of the contract, not an implementation detail. Never fails.
///
/// A parser that can succeed without consuming anything (`optional`,
/// `many` itself) makes this loop forever; callers pick the wrapped parser
/// accordingly. The engine does not guard against it.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, T, C, P> Parser<'src> for Many<P>
where
    T: Atomic + 'src,
    C: Cursor<'src, Element = T>,
    P: Parser<'src, Cursor = C, Output = Span<'src, T>>,
{
    type Cursor = C;
    type Output = Span<'src, T>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut C) -> Result<Self::Output, Self::Error> {
        let start = cursor.position();

        loop {
            let snapshot = cursor.snapshot();
            match self.parser.parse(cursor) {
                Ok(_) => {}
                Err(_) => {
                    cursor.restore(snapshot);
                    break;
                }
            }
        }

        Ok(Span::new(cursor.source(), start, cursor.position()))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P> {
    Many::new(parser)
}
