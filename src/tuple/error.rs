//! Error type for invalid [`Tuple`](super::Tuple) positions and ranges.
//!
//! Every variant describes a programmer error: an index or range the caller
//! should have validated before the call. Ordinary absence is never reported
//! through this type; look-ups that may legitimately miss return `Option`.

/// Represents an invalid position or range passed to a [`Tuple`](super::Tuple).
///
/// # Examples
///
/// ```rust
/// use funseq::tuple::{Tuple, TupleError};
///
/// let mut tuple = Tuple::from(vec![1, 2, 3]);
/// assert_eq!(
///     tuple.set(3, 4).err(),
///     Some(TupleError::IndexOutOfBounds { index: 3, size: 3 })
/// );
/// assert_eq!(
///     tuple.reverse_interval(2, 1).err(),
///     Some(TupleError::InvertedRange { start: 2, end: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// The index does not name an existing slot.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The size of the tuple at the time of the call.
        size: usize,
    },
    /// The start of a closed range lies after its end.
    InvertedRange {
        /// The start of the rejected range.
        start: usize,
        /// The end of the rejected range.
        end: usize,
    },
}

impl std::fmt::Display for TupleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, size } => write!(
                formatter,
                "index {index} out of bounds for tuple of size {size}"
            ),
            Self::InvertedRange { start, end } => {
                write!(formatter, "range start {start} is greater than end {end}")
            }
        }
    }
}

impl std::error::Error for TupleError {}

/// Logs a rejected tuple operation and hands the error back.
pub(super) fn rejected(error: TupleError) -> TupleError {
    #[cfg(feature = "tracing")]
    match error {
        TupleError::IndexOutOfBounds { index, size } => {
            tracing::debug!(index, size, "tuple index out of bounds");
        }
        TupleError::InvertedRange { start, end } => {
            tracing::debug!(start, end, "tuple range is inverted");
        }
    }
    error
}
