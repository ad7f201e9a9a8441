//! Error type for cursor misuse.

/// Represents reading or advancing a cursor that has run past its last element.
///
/// Cursors are forward-only. Calling
/// [`current`](super::SequentialIterator::current) or
/// [`advance`](super::SequentialIterator::advance) when
/// [`has_current`](super::SequentialIterator::has_current) is `false` is a
/// programming error, reported through this type instead of a panic.
///
/// # Examples
///
/// ```rust
/// use funseq::sequence::{CursorError, Sequence, SequentialIterator};
///
/// let empty: Vec<i32> = Vec::new();
/// let cursor = empty.create_iterator();
/// assert_eq!(cursor.current(), Err(CursorError::Exhausted { position: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorError {
    /// The cursor is past the last element of its sequence.
    Exhausted {
        /// The number of elements the cursor had already passed.
        position: usize,
    },
}

impl std::fmt::Display for CursorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { position } => write!(
                formatter,
                "cursor exhausted after {position} elements: no current element"
            ),
        }
    }
}

impl std::error::Error for CursorError {}
