/// Trait for atomic elements that can be used in parsing
/// This enables generic error formatting and span rendering
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// Convert a slice of elements to a displayable string
    fn format_slice(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}
