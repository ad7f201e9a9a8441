//! Forward-only cursors over sequences.
//!
//! A cursor is the minimal iteration contract every [`Sequence`](super::Sequence)
//! exposes through [`create_iterator`](super::Sequence::create_iterator):
//!
//! - [`reset_first`](SequentialIterator::reset_first): rewind to the first element
//! - [`has_current`](SequentialIterator::has_current): is there an element under the cursor?
//! - [`current`](SequentialIterator::current): borrow the element under the cursor
//! - [`advance`](SequentialIterator::advance): step exactly one position forward
//!
//! Two general-purpose cursors are provided:
//!
//! - [`SliceCursor`]: index-based cursor over contiguous storage
//! - [`IterCursor`]: cursor built from any cloneable borrowing iterator
//!
//! # Examples
//!
//! ```rust
//! use funseq::sequence::{Sequence, SequentialIterator};
//!
//! let values = vec![1, 2, 3];
//! let mut cursor = values.create_iterator();
//!
//! let mut seen = Vec::new();
//! while cursor.has_current() {
//!     seen.push(*cursor.current().unwrap());
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//!
//! cursor.reset_first();
//! assert_eq!(cursor.current(), Ok(&1));
//! ```

use std::marker::PhantomData;

use super::error::CursorError;

/// A forward-only cursor over the elements of a sequence.
///
/// The lifetime `'a` is the borrow of the underlying sequence, so elements
/// returned by [`current`](Self::current) outlive the cursor itself.
///
/// # Invariants
///
/// - After [`reset_first`](Self::reset_first) the cursor denotes the first
///   element, if there is one.
/// - [`has_current`](Self::has_current) is `false` exactly when the cursor has
///   moved past the last element.
/// - [`current`](Self::current) and [`advance`](Self::advance) fail with
///   [`CursorError::Exhausted`] when `has_current` is `false`.
pub trait SequentialIterator<'a> {
    /// The element type of the underlying sequence.
    type Item: 'a;

    /// Repositions the cursor on the first element.
    fn reset_first(&mut self) -> &mut Self;

    /// Returns `true` if the cursor is on an element.
    fn has_current(&self) -> bool;

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Exhausted`] if the cursor is past the last element.
    fn current(&self) -> Result<&'a Self::Item, CursorError>;

    /// Moves the cursor exactly one position forward.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::Exhausted`] if the cursor is past the last element.
    fn advance(&mut self) -> Result<&mut Self, CursorError>;

    /// Converts the cursor into a standard [`Iterator`] over the remaining elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::sequence::{Sequence, SequentialIterator};
    ///
    /// let values = vec![1, 2, 3, 4];
    /// let sum: i32 = values.create_iterator().elements().sum();
    /// assert_eq!(sum, 10);
    /// ```
    fn elements(self) -> Elements<'a, Self>
    where
        Self: Sized,
    {
        Elements {
            cursor: self,
            marker: PhantomData,
        }
    }
}

/// Iterator adapter returned by [`SequentialIterator::elements`].
pub struct Elements<'a, C> {
    cursor: C,
    marker: PhantomData<&'a ()>,
}

impl<'a, C> Iterator for Elements<'a, C>
where
    C: SequentialIterator<'a>,
{
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.cursor.current().ok()?;
        self.cursor.advance().ok()?;
        Some(element)
    }
}

// =============================================================================
// SliceCursor
// =============================================================================

/// Index-based cursor over contiguous storage.
///
/// Used by `Vec`, `SmallVec` and [`Tuple`](crate::tuple::Tuple).
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor positioned on the first element of `elements`.
    #[inline]
    #[must_use]
    pub const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    /// Returns the 0-based index of the element under the cursor.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> SequentialIterator<'a> for SliceCursor<'a, T> {
    type Item = T;

    #[inline]
    fn reset_first(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    #[inline]
    fn has_current(&self) -> bool {
        self.position < self.elements.len()
    }

    #[inline]
    fn current(&self) -> Result<&'a T, CursorError> {
        self.elements
            .get(self.position)
            .ok_or(CursorError::Exhausted {
                position: self.position,
            })
    }

    #[inline]
    fn advance(&mut self) -> Result<&mut Self, CursorError> {
        if !self.has_current() {
            return Err(CursorError::Exhausted {
                position: self.position,
            });
        }
        self.position += 1;
        Ok(self)
    }
}

// =============================================================================
// IterCursor
// =============================================================================

/// Cursor built from a cloneable iterator of borrowed elements.
///
/// The original iterator is kept so that [`reset_first`](SequentialIterator::reset_first)
/// can rewind without touching the container. Used by `VecDeque`,
/// `LinkedList` and `BTreeSet`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use funseq::sequence::{IterCursor, SequentialIterator};
///
/// let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
/// let cursor = IterCursor::new(set.iter());
/// assert_eq!(cursor.current(), Ok(&1));
/// ```
pub struct IterCursor<I: Iterator> {
    origin: I,
    remaining: I,
    current: Option<I::Item>,
    position: usize,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
{
    /// Creates a cursor positioned on the first element yielded by `iterator`.
    #[must_use]
    pub fn new(iterator: I) -> Self {
        let mut remaining = iterator.clone();
        let current = remaining.next();
        Self {
            origin: iterator,
            remaining,
            current,
            position: 0,
        }
    }
}

impl<'a, T, I> SequentialIterator<'a> for IterCursor<I>
where
    T: 'a,
    I: Iterator<Item = &'a T> + Clone,
{
    type Item = T;

    fn reset_first(&mut self) -> &mut Self {
        self.remaining = self.origin.clone();
        self.current = self.remaining.next();
        self.position = 0;
        self
    }

    #[inline]
    fn has_current(&self) -> bool {
        self.current.is_some()
    }

    #[inline]
    fn current(&self) -> Result<&'a T, CursorError> {
        self.current.ok_or(CursorError::Exhausted {
            position: self.position,
        })
    }

    fn advance(&mut self) -> Result<&mut Self, CursorError> {
        if self.current.is_none() {
            return Err(CursorError::Exhausted {
                position: self.position,
            });
        }
        self.current = self.remaining.next();
        self.position += 1;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_slice_cursor_walks_in_order() {
        let values = [10, 20, 30];
        let mut cursor = SliceCursor::new(&values);
        assert_eq!(cursor.current(), Ok(&10));
        cursor.advance().unwrap();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Ok(&20));
        cursor.advance().unwrap().advance().unwrap();
        assert!(!cursor.has_current());
    }

    #[rstest]
    fn test_slice_cursor_exhausted_errors() {
        let values = [1];
        let mut cursor = SliceCursor::new(&values);
        cursor.advance().unwrap();
        assert_eq!(cursor.current(), Err(CursorError::Exhausted { position: 1 }));
        assert!(cursor.advance().is_err());
    }

    #[rstest]
    fn test_slice_cursor_reset_first() {
        let values = [1, 2];
        let mut cursor = SliceCursor::new(&values);
        cursor.advance().unwrap().advance().unwrap();
        cursor.reset_first();
        assert_eq!(cursor.current(), Ok(&1));
    }

    #[rstest]
    fn test_empty_slice_cursor_has_no_current() {
        let values: [i32; 0] = [];
        let cursor = SliceCursor::new(&values);
        assert!(!cursor.has_current());
    }

    #[rstest]
    fn test_iter_cursor_reset_replays_elements() {
        let values = [1, 2, 3];
        let mut cursor = IterCursor::new(values.iter());
        let first_pass: Vec<i32> = {
            let mut collected = Vec::new();
            while let Ok(element) = cursor.current() {
                collected.push(*element);
                cursor.advance().unwrap();
            }
            collected
        };
        cursor.reset_first();
        let second_pass: Vec<i32> = cursor.elements().copied().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[rstest]
    fn test_iter_cursor_exhausted_position() {
        let values = [1, 2];
        let mut cursor = IterCursor::new(values.iter());
        cursor.advance().unwrap().advance().unwrap();
        assert_eq!(cursor.advance().err(), Some(CursorError::Exhausted { position: 2 }));
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![1, 2, 3, 4, 5], 5)]
    fn test_elements_yields_every_element(#[case] values: Vec<i32>, #[case] expected: usize) {
        assert_eq!(SliceCursor::new(&values).elements().count(), expected);
    }
}
