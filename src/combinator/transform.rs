//! Combinators that build a new sequence from an existing one.
//!
//! Every function here allocates a fresh `Vec` and leaves its input untouched.

use crate::sequence::{Sequence, SequentialIterator};

use super::traversal::for_each;

/// Returns `transformation(element)` for every element, in order.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::map;
///
/// let doubled = map(&vec![1, 2, 3], |element| element * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<S, B, F>(sequence: &S, mut transformation: F) -> Vec<B>
where
    S: Sequence,
    F: FnMut(&S::Item) -> B,
{
    let mut result = Vec::with_capacity(sequence.size());
    for_each(sequence, |element| result.push(transformation(element)));
    result
}

/// Returns `transformation(element)` for the elements satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::map_if;
///
/// let squares_of_odds = map_if(&vec![1, 2, 3, 4, 5], |element| element * element, |element| element % 2 == 1);
/// assert_eq!(squares_of_odds, vec![1, 9, 25]);
/// ```
pub fn map_if<S, B, F, P>(sequence: &S, mut transformation: F, mut predicate: P) -> Vec<B>
where
    S: Sequence,
    F: FnMut(&S::Item) -> B,
    P: FnMut(&S::Item) -> bool,
{
    let mut result = Vec::new();
    for_each(sequence, |element| {
        if predicate(element) {
            result.push(transformation(element));
        }
    });
    result
}

/// Returns the elements satisfying `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::filter;
///
/// let evens = filter(&vec![1, 2, 3, 4], |element| element % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<S, P>(sequence: &S, mut predicate: P) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut result = Vec::new();
    for_each(sequence, |element| {
        if predicate(element) {
            result.push(element.clone());
        }
    });
    result
}

/// Partitions the sequence into the elements satisfying `predicate` and the rest.
///
/// Both halves keep the relative order of the input, and their sizes add up
/// to the size of the input.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::split;
///
/// let (small, large) = split(&vec![5, 1, 8, 2, 9], |element| *element < 5);
/// assert_eq!(small, vec![1, 2]);
/// assert_eq!(large, vec![5, 8, 9]);
/// ```
pub fn split<S, P>(sequence: &S, mut predicate: P) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for_each(sequence, |element| {
        if predicate(element) {
            matching.push(element.clone());
        } else {
            rest.push(element.clone());
        }
    });
    (matching, rest)
}

/// Returns the first `count` elements.
///
/// A negative `count` yields an empty result, and a `count` larger than the
/// sequence yields a copy of the whole sequence.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::take;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(take(&values, 2), vec![1, 2]);
/// assert_eq!(take(&values, 10), values);
/// assert!(take(&values, -1).is_empty());
/// ```
pub fn take<S>(sequence: &S, count: isize) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let count = usize::try_from(count).unwrap_or(0);
    sequence
        .create_iterator()
        .elements()
        .take(count)
        .cloned()
        .collect()
}

/// Returns the elements remaining after skipping the first `count`.
///
/// A negative `count` skips nothing.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::drop;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(drop(&values, 3), vec![4]);
/// assert_eq!(drop(&values, -2), values);
/// assert!(drop(&values, 9).is_empty());
/// ```
pub fn drop<S>(sequence: &S, count: isize) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let count = usize::try_from(count).unwrap_or(0);
    sequence
        .create_iterator()
        .elements()
        .skip(count)
        .cloned()
        .collect()
}
