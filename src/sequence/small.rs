//! `Sequence` implementation for [`SmallVec`], enabled by the `smallvec` feature.

use smallvec::{Array, SmallVec};

use super::Sequence;
use super::cursor::SliceCursor;

impl<A: Array> Sequence for SmallVec<A> {
    type Item = A::Item;
    type Cursor<'a>
        = SliceCursor<'a, A::Item>
    where
        Self: 'a;

    #[inline]
    fn traverse<F>(&self, visitor: F) -> bool
    where
        F: FnMut(&A::Item) -> bool,
    {
        self.iter().all(visitor)
    }

    #[inline]
    fn append(&mut self, item: A::Item) -> &mut Self {
        self.push(item);
        self
    }

    fn append_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = A::Item>,
    {
        self.extend(items);
        self
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn create_iterator(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.as_slice())
    }

    fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = A::Item>,
    {
        items.into_iter().collect()
    }
}
