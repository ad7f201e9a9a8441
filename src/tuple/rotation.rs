//! In-place reversal and rotation for [`Tuple`].
//!
//! Rotation uses the three-reversal method. To rotate the closed range
//! `[start, end]` the range is cut at a split point into two blocks `A B`;
//! reversing each block and then the whole range turns `A B` into `B A`:
//!
//! ```text
//! A B  ->  rev(A) rev(B)  ->  rev(rev(A) rev(B))  =  B A
//! ```
//!
//! Each element is swapped at most twice, so a rotation costs O(range length)
//! time and O(1) extra space.
//!
//! A right rotation by `n` cuts the range after its first `n` elements, so
//! those elements move to the back of the range: `[0, 1, 2, 3, 4]` rotated
//! right by 2 becomes `[2, 3, 4, 0, 1]`, as `slice::rotate_left(2)` would
//! leave it. A left rotation cuts before the last `n` elements and moves them
//! to the front.

use super::error::{TupleError, rejected};
use super::Tuple;

impl<T> Tuple<T> {
    /// Checks that `[start, end]` is a non-empty closed range inside the tuple.
    fn validate_interval(&self, start: usize, end: usize) -> Result<(), TupleError> {
        let size = self.size();
        if start >= size {
            return Err(rejected(TupleError::IndexOutOfBounds { index: start, size }));
        }
        if end >= size {
            return Err(rejected(TupleError::IndexOutOfBounds { index: end, size }));
        }
        if start > end {
            return Err(rejected(TupleError::InvertedRange { start, end }));
        }
        Ok(())
    }

    /// Validates a rotation range and reduces `count` modulo the range length.
    fn validate_rotation(&self, start: usize, end: usize, count: usize) -> Result<usize, TupleError> {
        if start > end {
            return Err(rejected(TupleError::InvertedRange { start, end }));
        }
        self.validate_interval(start, end)?;
        Ok(count % (end - start + 1))
    }

    /// Swaps inward from both ends of `[start, end]`. Indices must be valid.
    fn reverse_unchecked(&mut self, mut start: usize, mut end: usize) {
        while start < end {
            self.elements.swap(start, end);
            start += 1;
            end -= 1;
        }
    }

    /// Reverses the elements of the closed range `[start, end]` in place.
    ///
    /// # Errors
    ///
    /// - [`TupleError::IndexOutOfBounds`] if `start` or `end` is not a valid index
    /// - [`TupleError::InvertedRange`] if `start > end`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::Tuple;
    ///
    /// let mut tuple = Tuple::from(vec![1, 2, 3, 4, 5]);
    /// tuple.reverse_interval(1, 3).unwrap();
    /// assert_eq!(tuple.as_slice(), &[1, 4, 3, 2, 5]);
    /// ```
    pub fn reverse_interval(&mut self, start: usize, end: usize) -> Result<&mut Self, TupleError> {
        self.validate_interval(start, end)?;
        self.reverse_unchecked(start, end);
        Ok(self)
    }

    /// Reverses the whole tuple in place. An empty tuple is left unchanged.
    pub fn reverse_in_place(&mut self) -> &mut Self {
        if let Some(last) = self.size().checked_sub(1) {
            self.reverse_unchecked(0, last);
        }
        self
    }

    /// Returns a reversed copy, leaving `self` untouched.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = self.clone();
        reversed.reverse_in_place();
        reversed
    }

    /// Reverses `[start, split)` and `[split, end]`, then all of `[start, end]`.
    /// Requires `start < split <= end` inside the tuple.
    fn rotate_around(&mut self, start: usize, split: usize, end: usize) {
        self.reverse_unchecked(start, split - 1);
        self.reverse_unchecked(split, end);
        self.reverse_unchecked(start, end);
    }

    /// Right rotation of a valid range with `count` already reduced.
    fn rotate_range_right(&mut self, start: usize, end: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.rotate_around(start, start + count, end);
        #[cfg(feature = "tracing")]
        tracing::trace!(start, end, count, "rotated tuple range right");
    }

    /// Left rotation of a valid range with `count` already reduced.
    fn rotate_range_left(&mut self, start: usize, end: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.rotate_around(start, end + 1 - count, end);
        #[cfg(feature = "tracing")]
        tracing::trace!(start, end, count, "rotated tuple range left");
    }

    /// Rotates the closed range `[start, end]` right by `count` positions in place.
    ///
    /// The first `count` elements of the range move to its back. `count` is
    /// reduced modulo the range length, so any count is accepted.
    ///
    /// # Errors
    ///
    /// - [`TupleError::IndexOutOfBounds`] if `start` or `end` is not a valid index
    /// - [`TupleError::InvertedRange`] if `start > end`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::Tuple;
    ///
    /// let mut tuple = Tuple::from(vec![0, 1, 2, 3, 4, 5]);
    /// tuple.rotate_interval_right_in_place(1, 4, 1).unwrap();
    /// assert_eq!(tuple.as_slice(), &[0, 2, 3, 4, 1, 5]);
    /// ```
    pub fn rotate_interval_right_in_place(
        &mut self,
        start: usize,
        end: usize,
        count: usize,
    ) -> Result<&mut Self, TupleError> {
        let count = self.validate_rotation(start, end, count)?;
        self.rotate_range_right(start, end, count);
        Ok(self)
    }

    /// Rotates the closed range `[start, end]` left by `count` positions in place.
    ///
    /// The last `count` elements of the range move to its front. `count` is
    /// reduced modulo the range length, so any count is accepted.
    ///
    /// # Errors
    ///
    /// - [`TupleError::IndexOutOfBounds`] if `start` or `end` is not a valid index
    /// - [`TupleError::InvertedRange`] if `start > end`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::Tuple;
    ///
    /// let mut tuple = Tuple::from(vec![0, 1, 2, 3, 4, 5]);
    /// tuple.rotate_interval_left_in_place(1, 4, 1).unwrap();
    /// assert_eq!(tuple.as_slice(), &[0, 4, 1, 2, 3, 5]);
    /// ```
    pub fn rotate_interval_left_in_place(
        &mut self,
        start: usize,
        end: usize,
        count: usize,
    ) -> Result<&mut Self, TupleError> {
        let count = self.validate_rotation(start, end, count)?;
        self.rotate_range_left(start, end, count);
        Ok(self)
    }

    /// Rotates the whole tuple right by `count` positions in place.
    pub fn rotate_right_in_place(&mut self, count: usize) -> &mut Self {
        let size = self.size();
        if size > 0 {
            self.rotate_range_right(0, size - 1, count % size);
        }
        self
    }

    /// Rotates the whole tuple left by `count` positions in place.
    pub fn rotate_left_in_place(&mut self, count: usize) -> &mut Self {
        let size = self.size();
        if size > 0 {
            self.rotate_range_left(0, size - 1, count % size);
        }
        self
    }

    /// Returns a copy rotated right by `count` positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funseq::tuple::Tuple;
    ///
    /// let tuple = Tuple::from(vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(tuple.rotate_right(1).as_slice(), &['b', 'c', 'd', 'a']);
    /// assert_eq!(tuple.as_slice(), &['a', 'b', 'c', 'd']);
    /// ```
    #[must_use]
    pub fn rotate_right(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let mut rotated = self.clone();
        rotated.rotate_right_in_place(count);
        rotated
    }

    /// Returns a copy rotated left by `count` positions.
    #[must_use]
    pub fn rotate_left(&self, count: usize) -> Self
    where
        T: Clone,
    {
        let mut rotated = self.clone();
        rotated.rotate_left_in_place(count);
        rotated
    }
}
