//! Index-addressable tuple with in-place reversal and rotation.
//!
//! [`Tuple`] is an owned, contiguous sequence with O(1) positional reads and
//! writes. It implements [`Sequence`], so every combinator accepts it, and it
//! adds its own positional algorithms:
//!
//! - [`reverse_interval`](Tuple::reverse_interval): reverse a closed range in place
//! - [`rotate_interval_right_in_place`](Tuple::rotate_interval_right_in_place) and
//!   [`rotate_interval_left_in_place`](Tuple::rotate_interval_left_in_place):
//!   rotate a closed range in place with three reversals and no scratch buffer
//! - whole-tuple and non-mutating variants of both
//!
//! # Positional Errors
//!
//! Out-of-range indices and inverted ranges are programmer errors and are
//! reported as [`TupleError`]. Look-ups that may legitimately miss, such as
//! [`get`](Tuple::get), return `Option` instead.
//!
//! # Examples
//!
//! ```rust
//! use funseq::tuple;
//! use funseq::tuple::Tuple;
//!
//! let mut values = tuple![1, 2, 3, 4, 5];
//! values.rotate_right_in_place(2);
//! assert_eq!(values.as_slice(), &[3, 4, 5, 1, 2]);
//!
//! values.reverse_interval(0, 1).unwrap();
//! assert_eq!(values.as_slice(), &[4, 3, 5, 1, 2]);
//!
//! let mut slots: Tuple<i32> = Tuple::build(3);
//! slots.set(1, 7).unwrap();
//! assert_eq!(slots.as_slice(), &[0, 7, 0]);
//! ```

mod error;
mod rotation;

use std::fmt;
use std::ops::{Index, IndexMut};

pub use error::TupleError;

use crate::sequence::{Sequence, SliceCursor};
use error::rejected;

/// Cursor over a [`Tuple`], returned by [`Tuple::create_iterator`].
pub type TupleCursor<'a, T> = SliceCursor<'a, T>;

/// An owned, index-addressable ordered container.
///
/// The elements live in a single heap buffer. [`swap`](Tuple::swap) exchanges
/// the buffers of two tuples, so it costs O(1) regardless of their sizes.
///
/// # Time Complexity
///
/// | Operation          | Complexity        |
/// |--------------------|-------------------|
/// | `get` / `set`      | O(1)              |
/// | `append`           | O(1) amortized    |
/// | `swap`             | O(1)              |
/// | `reverse_interval` | O(range length)   |
/// | `rotate_*`         | O(range length)   |
/// | `clone`            | O(n)              |
///
/// # Examples
///
/// ```rust
/// use funseq::tuple::Tuple;
///
/// let mut left = Tuple::from(vec![1, 2, 3]);
/// let mut right = Tuple::from(vec![4]);
/// left.swap(&mut right);
/// assert_eq!(left.as_slice(), &[4]);
/// assert_eq!(right.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple<T> {
    elements: Vec<T>,
}

impl<T> Tuple<T> {
    /// Creates an empty tuple.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty tuple with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a tuple with `size` slots, each holding `T::default()`.
    ///
    /// The default value is the sentinel for a slot that has not been
    /// [`set`](Self::set) yet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::Tuple;
    ///
    /// let tuple: Tuple<Option<&str>> = Tuple::build(2);
    /// assert_eq!(tuple.as_slice(), &[None, None]);
    /// ```
    #[must_use]
    pub fn build(size: usize) -> Self
    where
        T: Default,
    {
        let mut elements = Vec::with_capacity(size);
        elements.resize_with(size, T::default);
        Self { elements }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the tuple holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, or `None` if there is no such slot.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TupleError::IndexOutOfBounds`] if `index >= size()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::{Tuple, TupleError};
    ///
    /// let tuple = Tuple::from(vec![1, 2, 3, 4]);
    /// assert_eq!(tuple.nth(0), Ok(&1));
    /// assert_eq!(tuple.nth(4), Err(TupleError::IndexOutOfBounds { index: 4, size: 4 }));
    /// ```
    pub fn nth(&self, index: usize) -> Result<&T, TupleError> {
        let size = self.size();
        self.elements
            .get(index)
            .ok_or_else(|| rejected(TupleError::IndexOutOfBounds { index, size }))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TupleError::IndexOutOfBounds`] if `index >= size()`.
    pub fn nth_mut(&mut self, index: usize) -> Result<&mut T, TupleError> {
        let size = self.size();
        self.elements
            .get_mut(index)
            .ok_or_else(|| rejected(TupleError::IndexOutOfBounds { index, size }))
    }

    /// Replaces the element at an existing position.
    ///
    /// # Errors
    ///
    /// Returns [`TupleError::IndexOutOfBounds`] if `index >= size()`. The
    /// tuple never grows through `set`.
    pub fn set(&mut self, index: usize, item: T) -> Result<&mut Self, TupleError> {
        *self.nth_mut(index)? = item;
        Ok(self)
    }

    /// Appends `item` after the last element.
    #[inline]
    pub fn append(&mut self, item: T) -> &mut Self {
        self.elements.push(item);
        self
    }

    /// Appends every element of `items`, preserving their order.
    pub fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(items);
        self
    }

    /// Exchanges the contents of two tuples in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) -> &mut Self {
        std::mem::swap(&mut self.elements, &mut other.elements);
        self
    }

    /// Returns a cursor positioned on the first element.
    #[inline]
    #[must_use]
    pub fn create_iterator(&self) -> TupleCursor<'_, T> {
        SliceCursor::new(&self.elements)
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the tuple and returns its buffer.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for Tuple<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Tuple<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Tuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Tuple<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Tuple<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tuple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Panics if `index` is out of bounds, like slice indexing.
/// Use [`Tuple::nth`] for a checked read.
impl<T> Index<usize> for Tuple<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Tuple<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Tuple<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("Tuple");
        for element in &self.elements {
            tuple.field(element);
        }
        tuple.finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tuple<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

impl<T> Sequence for Tuple<T> {
    type Item = T;
    type Cursor<'a>
        = TupleCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.elements.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: T) -> &mut Self {
        Self::append(self, item)
    }

    fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::append_all(self, items)
    }

    #[inline]
    fn size(&self) -> usize {
        Self::size(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn swap(&mut self, other: &mut Self) -> &mut Self {
        Self::swap(self, other)
    }

    #[inline]
    fn create_iterator(&self) -> TupleCursor<'_, T> {
        Self::create_iterator(self)
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

static_assertions::assert_impl_all!(Tuple<i32>: Send, Sync);
static_assertions::assert_impl_all!(Tuple<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Tuple<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.size()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Tuple<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

/// Creates a [`Tuple`] containing the given elements.
///
/// `tuple![a, b, c]` is the tuple counterpart of `vec![a, b, c]`.
///
/// # Examples
///
/// ```rust
/// use funseq::tuple;
/// use funseq::tuple::Tuple;
///
/// let empty: Tuple<i32> = tuple![];
/// assert!(empty.is_empty());
///
/// let values = tuple![1, 2, 3, 4];
/// assert_eq!(values.size(), 4);
/// assert_eq!(values.nth(0), Ok(&1));
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::tuple::Tuple::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::tuple::Tuple::from(vec![$($element),+])
    };
}
