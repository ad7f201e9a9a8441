//! The element type produced by [`zip`](super::zip).

use std::fmt;

/// An ordered pair of values.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::Pair;
///
/// let pair = Pair::new(1, "one");
/// assert_eq!(pair.first, 1);
/// assert_eq!(pair.second, "one");
/// assert_eq!(pair.swap(), Pair::new("one", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// The element taken from the first sequence.
    pub first: A,
    /// The element taken from the second sequence.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the pair with its components exchanged.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Converts the pair into a native Rust tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

static_assertions::assert_impl_all!(Pair<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Pair<i32, char>: Copy);
