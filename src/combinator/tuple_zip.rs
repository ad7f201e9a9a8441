//! Zipping any number of sequences into [`Tuple`]s.
//!
//! Elements of different types can be zipped together by wrapping them in a
//! sum type first; see the example on [`tzip`].

use crate::sequence::{Sequence, SequentialIterator};
use crate::tuple::{Tuple, TupleError};

use super::transform::map;

/// Zips `list` and every sequence in `lists` into one [`Tuple`] per position.
///
/// Each tuple has `lists.len() + 1` slots: slot 0 comes from `list`, slot
/// `k + 1` from `lists[k]`. The result always has exactly as many tuples as
/// `list` has elements. `list` and `lists` may be different container types.
/// The remaining lists are folded in left to right; when
/// one of them is shorter than `list`, the tuples past its end keep
/// `T::default()` in its slot.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::tzip;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// enum Cell {
///     #[default]
///     Empty,
///     Number(i32),
///     Text(&'static str),
/// }
///
/// let numbers = vec![Cell::Number(1), Cell::Number(2)];
/// let names = vec![Cell::Text("one"), Cell::Text("two")];
/// let signs = vec![Cell::Number(-1)];
///
/// let rows = tzip(&numbers, &[&names, &signs]);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].as_slice(), &[Cell::Number(1), Cell::Text("one"), Cell::Number(-1)]);
/// assert_eq!(rows[1].as_slice(), &[Cell::Number(2), Cell::Text("two"), Cell::Empty]);
/// ```
pub fn tzip<S, R, T>(list: &S, lists: &[&R]) -> Vec<Tuple<T>>
where
    S: Sequence<Item = T>,
    R: Sequence<Item = T>,
    T: Clone + Default,
{
    let width = lists.len() + 1;
    let mut rows = map(list, |element| {
        let mut row: Tuple<T> = Tuple::build(width);
        row[0] = element.clone();
        row
    });

    for (column, other) in lists.iter().enumerate() {
        for (row, element) in rows.iter_mut().zip(other.create_iterator().elements()) {
            row[column + 1] = element.clone();
        }
    }

    rows
}

/// Splits a sequence of tuples into a tuple of column sequences.
///
/// The number of columns is the size of the first tuple; an empty input
/// yields an empty tuple. Shorter tuples contribute to fewer columns.
///
/// # Errors
///
/// Returns [`TupleError::IndexOutOfBounds`] if a tuple is longer than the
/// first one.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::{tunzip, tzip};
///
/// let first = vec![1, 2, 3];
/// let second = vec![10, 20, 30];
/// let columns = tunzip(&tzip(&first, &[&second])).unwrap();
/// assert_eq!(columns.size(), 2);
/// assert_eq!(columns[0], first);
/// assert_eq!(columns[1], second);
/// ```
pub fn tunzip<S, T>(tuples: &S) -> Result<Tuple<Vec<T>>, TupleError>
where
    S: Sequence<Item = Tuple<T>>,
    T: Clone,
{
    let Some(first) = tuples.first() else {
        return Ok(Tuple::new());
    };

    let mut columns: Tuple<Vec<T>> = Tuple::build(first.size());
    for tuple in tuples.create_iterator().elements() {
        for (index, element) in tuple.iter().enumerate() {
            columns.nth_mut(index)?.push(element.clone());
        }
    }

    Ok(columns)
}
