use crate::cursors::SliceCursor;

/// A specialized cursor for decoded text, one code point per element
///
/// Built from a slice of chars, so multi-byte characters advance the
/// position by exactly one.
pub type CharCursor<'src> = SliceCursor<'src, char>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_char_cursor_unicode() {
        let chars: Vec<char> = "åäö".chars().collect();
        let mut cursor = CharCursor::new(&chars);

        assert_eq!(cursor.peek().unwrap(), 'å');
        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'ä');
        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'ö');
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_char_cursor_emoji_is_one_element() {
        let chars: Vec<char> = "a🦀b".chars().collect();
        let mut cursor = CharCursor::new(&chars);

        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), '🦀');
        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'b');
    }
}
