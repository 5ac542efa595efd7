use crate::cursors::SliceCursor;

/// A specialized cursor for byte data (u8)
pub type ByteCursor<'src> = SliceCursor<'src, u8>;
