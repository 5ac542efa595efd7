//! # Retrace - Backtracking Parser Combinators
//!
//! A recursive-descent parser combinator library built around an explicit
//! snapshot/restore cursor. Parsers are composed from one leaf primitive
//! (`satisfy`) with sequencing, choice, repetition and backtracking
//! operators, and a successful parse yields the consumed span of the
//! input rather than a syntax tree. The library emphasizes:
//!
//! - **Zero panics**: all parsing errors are handled through `Result` types
//! - **Explicit backtracking**: the cursor only moves backwards through
//!   `attempt` and the combinators documented to rewind
//! - **Composability**: small parsers combine into larger ones using
//!   combinators
//! - **Flat results**: composite parsers return the contiguous span they
//!   consumed, cheap to slice and to concatenate
//!
//! ```
//! use retrace::{ByteCursor, Parser, ascii, some};
//!
//! let data = b"123abc";
//! let mut cursor = ByteCursor::new(data);
//! let number = some(ascii::digit());
//!
//! let span = number.parse(&mut cursor).unwrap();
//! assert_eq!(span.as_string(), "123");
//! ```

pub mod ascii;
pub mod atomic;
pub mod attempt;
pub mod cursor;
pub mod cursors;
pub mod eof;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod replicate;
pub mod satisfy;
pub mod some;
pub mod span;
pub mod text;
pub mod then;

pub use atomic::Atomic;
pub use attempt::{Attempt, AttemptExt, attempt};
pub use cursor::Cursor;
pub use cursors::{ByteCursor, CharCursor, SliceCursor};
pub use eof::eof;
pub use error::ParseError;
pub use lazy::lazy;
pub use literal::literal;
pub use many::many;
pub use map::{Map, MapExt, map};
pub use optional::optional;
pub use or::{Or, OrExt, or};
pub use parser::{BoxedParser, Parser};
pub use replicate::replicate;
pub use satisfy::{Satisfy, any_element, element, satisfy};
pub use some::some;
pub use span::Span;
pub use then::{Then, ThenExt, then};
