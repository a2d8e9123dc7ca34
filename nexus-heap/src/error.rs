//! Error type for heap operations.

use core::fmt;

/// Failure returned by [`Heap`](crate::Heap) and [`Cursor`](crate::Cursor)
/// operations.
///
/// Every variant is reported to the immediate caller; the heap never retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap was constructed with a capacity of zero or `usize::MAX`.
    InvalidCapacity,
    /// `peek` or `pop` was called on an empty heap.
    Empty,
    /// `Cursor::remove` was called without a preceding `next`, or twice for
    /// the same element.
    IllegalCursorState,
    /// The comparator could not order two elements.
    Incomparable,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => write!(f, "heap capacity must be in 1..usize::MAX"),
            Self::Empty => write!(f, "heap is empty"),
            Self::IllegalCursorState => {
                write!(f, "cursor remove requires a preceding call to next")
            }
            Self::Incomparable => write!(f, "elements are not mutually comparable"),
        }
    }
}

impl std::error::Error for HeapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
        assert_eq!(
            HeapError::InvalidCapacity.to_string(),
            "heap capacity must be in 1..usize::MAX"
        );
        assert_eq!(
            HeapError::Incomparable.to_string(),
            "elements are not mutually comparable"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(HeapError::IllegalCursorState);
    }
}
