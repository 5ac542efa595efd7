use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;

/// Opaque position token produced by [`SliceCursor::snapshot`]
#[derive(Debug, Copy, Clone)]
pub struct Snapshot(usize);

/// Cursor over a borrowed slice of atomic elements
///
/// The slice is never mutated; only the position moves, and only forward
/// except through [`restore`](Cursor::restore).
#[derive(Debug, Clone)]
pub struct SliceCursor<'src, T: Atomic> {
    data: &'src [T],
    position: usize,
}

impl<'src, T: Atomic> SliceCursor<'src, T> {
    pub fn new(data: &'src [T]) -> Self {
        SliceCursor { data, position: 0 }
    }
}

impl<'src, T: Atomic> Cursor<'src> for SliceCursor<'src, T> {
    type Element = T;
    type Error = ParseError<T>;
    type Snapshot = Snapshot;

    fn peek(&self) -> Result<T, ParseError<T>> {
        match self.data.get(self.position) {
            Some(&element) => Ok(element),
            None => Err(ParseError::EndOfInput {
                offset: self.position,
            }),
        }
    }

    fn advance(&mut self) {
        if self.position < self.data.len() {
            self.position += 1;
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot(self.position)
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.position = snapshot.0;
    }

    fn position(&self) -> usize {
        self.position
    }

    fn source(&self) -> &'src [T] {
        self.data
    }
}
