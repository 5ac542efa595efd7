use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::span::Span;

/// Parser combinator that matches one or more occurrences of the given
/// parser and returns the covering span
///
/// Behaves as the first match followed by `many`, evaluated as a single
/// backtracked unit: if the first application fails, the cursor is rewound
/// to the start position and that failure is re-raised.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, T, C, P> Parser<'src> for Some<P>
where
    T: Atomic + 'src,
    C: Cursor<'src, Element = T>,
    P: Parser<'src, Cursor = C, Output = Span<'src, T>>,
{
    type Cursor = C;
    type Output = Span<'src, T>;
    type Error = P::Error;

    fn parse(&self, cursor: &mut C) -> Result<Self::Output, Self::Error> {
        let outer = cursor.snapshot();
        let start = cursor.position();

        // First parse must succeed
        if let Err(error) = self.parser.parse(cursor) {
            cursor.restore(outer);
            return Err(error);
        }

        // Continue parsing zero or more times
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

/// Convenience function to create a Some parser
pub fn some<P>(parser: P) -> Some<P> {
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::literal::literal;
    use crate::satisfy::element;

    #[test]
    fn test_some_zero_matches_fails() {
        let data = b"xyz";
        let mut cursor = ByteCursor::new(data);
        let parser = some(element(b'a'));

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_some_one_match() {
        let data = b"abc";
        let mut cursor = ByteCursor::new(data);
        let parser = some(element(b'a'));

        let span = parser.parse(&mut cursor).unwrap();
        assert_eq!(span.as_string(), "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_some_multiple_matches() {
        let data = b"aaabcd";
        let mut cursor = ByteCursor::new(data);
        let parser = some(element(b'a'));

        let span = parser.parse(&mut cursor).unwrap();
        assert_eq!(span.as_string(), "aaa");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_some_empty_input() {
        let data = b"";
        let mut cursor = ByteCursor::new(data);
        let parser = some(element(b'a'));

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_some_rewinds_partial_first_match() {
        let data = b"ax";
        let mut cursor = ByteCursor::new(data);
        // the first iteration consumes 'a' before failing on 'x'
        let parser = some(literal(b"ab"));

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_some_stops_at_failing_iteration_boundary() {
        let data = b"ababax";
        let mut cursor = ByteCursor::new(data);
        let parser = some(literal(b"ab"));

        let span = parser.parse(&mut cursor).unwrap();
        assert_eq!(span.as_string(), "abab");
        assert_eq!(cursor.position(), 4);
    }
}
