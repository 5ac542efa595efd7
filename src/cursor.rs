use std::error::Error;

/// Generic cursor trait for parser combinators
///
/// A cursor is a mutable read position over an immutable sequence of
/// elements. Parsers advance it in place through `&mut` borrows; the
/// snapshot/restore pair is the only way to move it backwards, which keeps
/// backtracking an explicit operation owned by the combinators that
/// promise it.
pub trait Cursor<'src> {
    /// The type of elements this cursor iterates over
    type Element;

    /// Error type returned when cursor operations fail
    type Error: Error;

    /// Opaque token capturing a position, O(1) to take and to restore
    type Snapshot: Copy;

    /// Get the element at the current position without moving it
    ///
    /// Returns an error if the cursor is at the end of the sequence
    fn peek(&self) -> Result<Self::Element, Self::Error>;

    /// Move the position forward by one element
    ///
    /// No-op at the end of the sequence; callers advance only after a
    /// successful `peek`
    fn advance(&mut self);

    /// Check if the cursor is at the end of the sequence
    fn at_end(&self) -> bool {
        self.peek().is_err()
    }

    /// Capture the current position
    fn snapshot(&self) -> Self::Snapshot;

    /// Reinstate a position previously captured with `snapshot`
    ///
    /// Only defined for snapshots taken from the same cursor
    fn restore(&mut self, snapshot: Self::Snapshot);

    /// Get the current position in the sequence
    ///
    /// For a cursor at the end, this returns the length of the sequence
    fn position(&self) -> usize;

    /// Get the source data without consuming the cursor
    fn source(&self) -> &'src [Self::Element];
}
