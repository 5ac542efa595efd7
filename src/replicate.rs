use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::span::Span;

/// Parser combinator that applies the given parser an exact number of
/// times and returns the covering span
///
/// Plain sequencing with no backtracking of its own: when the i-th
/// application fails, the failure propagates and everything the earlier
/// iterations consumed stays consumed, together with the failing
/// iteration's partial consumption. Callers that need all-or-nothing
/// behavior wrap the whole repetition in `attempt`. A count of zero
/// succeeds with the empty span.
pub struct Replicate<P> {
    parser: P,
    count: usize,
}

impl<P> Replicate<P> {
    pub fn new(parser: P, count: usize) -> Self {
        Replicate { parser, count }
    }
}

impl<'src, T, C, P> Parser<'src> for Replicate<P>
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

        for _ in 0..self.count {
            self.parser.parse(cursor)?;
        }

        Ok(Span::new(cursor.source(), start, cursor.position()))
    }
}

/// Convenience function to create a Replicate parser
pub fn replicate<P>(parser: P, count: usize) -> Replicate<P> {
    Replicate::new(parser, count)
}
