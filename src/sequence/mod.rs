//! The sequence capability contract.
//!
//! Every combinator in this crate is written against two traits:
//!
//! - [`SequentialIterator`]: a forward-only cursor (reset, has-current, current, advance)
//! - [`Sequence`]: an ordered, traversable, appendable container that can hand
//!   out cursors over itself
//!
//! Any container qualifies by implementing [`Sequence`]. Implementations are
//! provided for `Vec`, `VecDeque`, `LinkedList`, `BTreeSet`,
//! [`Tuple`](crate::tuple::Tuple), and (with the `smallvec` feature) `SmallVec`.
//!
//! # Laws
//!
//! ## Emptiness
//!
//! ```text
//! s.is_empty() == (s.size() == 0)
//! ```
//!
//! ## Traversal stability
//!
//! Two traversals of the same sequence visit the same elements in the same
//! order, provided the sequence is not mutated in between.
//!
//! ## Short-circuit
//!
//! `traverse` stops at the first element for which the visitor returns
//! `false`, and returns `true` only if every element was visited.
//!
//! # Examples
//!
//! ```rust
//! use funseq::sequence::Sequence;
//!
//! let mut values: Vec<i32> = Sequence::create([1, 2, 3]);
//! Sequence::append(&mut values, 4);
//! assert_eq!(values.size(), 4);
//!
//! // Early termination
//! let mut visited = 0;
//! let completed = values.traverse(|element| {
//!     visited += 1;
//!     *element < 2
//! });
//! assert!(!completed);
//! assert_eq!(visited, 2);
//! ```

mod cursor;
mod error;
mod standard;

#[cfg(feature = "smallvec")]
mod small;

pub use cursor::{Elements, IterCursor, SequentialIterator, SliceCursor};
pub use error::CursorError;

/// An ordered, traversable, appendable container.
///
/// # Required Methods
///
/// - `traverse`: visit every element in order, with early termination
/// - `append`: push one element at the end
/// - `size`: number of elements
/// - `create_iterator`: a cursor positioned on the first element
/// - `create`: build a new container of the same type from elements
///
/// # Provided Methods
///
/// - `append_all`: append many elements in order
/// - `is_empty`: `size() == 0`
/// - `swap`: O(1) exchange of contents with another container of the same type
/// - `first`: the first element, if any
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type returned by [`create_iterator`](Self::create_iterator).
    type Cursor<'a>: SequentialIterator<'a, Item = Self::Item>
    where
        Self: 'a;

    /// Visits every element in order until `visitor` returns `false`.
    ///
    /// Returns `true` if every element was visited, `false` if the visitor
    /// requested an early stop.
    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool;

    /// Appends `item` after the last element.
    fn append(&mut self, item: Self::Item) -> &mut Self;

    /// Appends every element of `items`, preserving their order.
    fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in items {
            self.append(item);
        }
        self
    }

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Exchanges the contents of `self` and `other` without copying elements.
    fn swap(&mut self, other: &mut Self) -> &mut Self
    where
        Self: Sized,
    {
        std::mem::swap(self, other);
        self
    }

    /// Returns a cursor positioned on the first element.
    fn create_iterator(&self) -> Self::Cursor<'_>;

    /// Builds a new sequence of this type holding `items` in order.
    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
        Self: Sized;

    /// Returns the first element in traversal order.
    fn first(&self) -> Option<&Self::Item> {
        self.create_iterator().current().ok()
    }
}
