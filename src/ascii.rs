//! Byte-level convenience parsers for ASCII input

use crate::satisfy::{Satisfy, satisfy};

/// Parser for a single ASCII decimal digit
pub fn digit() -> Satisfy<impl Fn(&u8) -> bool> {
    satisfy(|b: &u8| b.is_ascii_digit(), "expected digit")
}

/// Parser for a single ASCII letter
pub fn letter() -> Satisfy<impl Fn(&u8) -> bool> {
    satisfy(|b: &u8| b.is_ascii_alphabetic(), "expected letter")
}

/// Parser for a single ASCII whitespace byte
pub fn whitespace() -> Satisfy<impl Fn(&u8) -> bool> {
    satisfy(|b: &u8| b.is_ascii_whitespace(), "expected whitespace")
}
