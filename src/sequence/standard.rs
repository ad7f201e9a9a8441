//! `Sequence` implementations for standard library containers.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use super::Sequence;
use super::cursor::{IterCursor, SliceCursor};

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = SliceCursor<'a, T>
    where
        Self: 'a;

    #[inline]
    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: T) -> &mut Self {
        self.push(item);
        self
    }

    fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
        self
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn create_iterator(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self)
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::collections::vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: T) -> &mut Self {
        self.push_back(item);
        self
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn create_iterator(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter())
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::collections::linked_list::Iter<'a, T>>
    where
        Self: 'a;

    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: T) -> &mut Self {
        self.push_back(item);
        self
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn create_iterator(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter())
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

/// Tree-backed ordered set.
///
/// Traversal visits elements in ascending order. `append` inserts, so
/// appending a duplicate leaves the set unchanged.
impl<T: Ord> Sequence for BTreeSet<T> {
    type Item = T;
    type Cursor<'a>
        = IterCursor<std::collections::btree_set::Iter<'a, T>>
    where
        Self: 'a;

    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: T) -> &mut Self {
        self.insert(item);
        self
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn create_iterator(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.iter())
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}
