use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a
/// mapping function
///
/// Cursor movement and failures are those of the wrapped parser,
/// untouched. This is the escape hatch from spans into arbitrary result
/// values.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, Self::Error> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::ByteCursor;
    use crate::or::OrExt;
    use crate::satisfy::{element, satisfy};
    use crate::some::some;

    #[test]
    fn test_map_span_to_number() {
        let data = b"123+";
        let mut cursor = ByteCursor::new(data);
        let parser = some(satisfy(|b: &u8| b.is_ascii_digit(), "expected digit"))
            .map(|span| span.as_string().parse::<i64>().unwrap());

        let value = parser.parse(&mut cursor).unwrap();
        assert_eq!(value, 123);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_map_preserves_errors() {
        let data = b"xyz";
        let mut cursor = ByteCursor::new(data);
        let parser = element(b'a').map(|span| span.len());

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_map_with_or_common_type() {
        #[derive(Debug, PartialEq)]
        enum Token {
            Open,
            Close,
        }

        let data = b")";
        let mut cursor = ByteCursor::new(data);
        let parser = element(b'(')
            .map(|_| Token::Open)
            .or(element(b')').map(|_| Token::Close));

        let token = parser.parse(&mut cursor).unwrap();
        assert_eq!(token, Token::Close);
    }

    #[test]
    fn test_map_function_syntax() {
        let data = b"9";
        let mut cursor = ByteCursor::new(data);
        let parser = map(element(b'9'), |span| span.len());

        assert_eq!(parser.parse(&mut cursor).unwrap(), 1);
    }
}
