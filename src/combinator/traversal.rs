//! Combinators that visit a sequence and return a scalar or a borrowed element.

use crate::sequence::{Sequence, SequentialIterator};

/// Calls `operation` on every element in order and returns the sequence.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::for_each;
///
/// let mut total = 0;
/// let values = vec![1, 2, 3];
/// let same = for_each(&values, |element| total += element);
/// assert_eq!(total, 6);
/// assert_eq!(same, &values);
/// ```
pub fn for_each<S, F>(sequence: &S, mut operation: F) -> &S
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    sequence.traverse(|element| {
        operation(element);
        true
    });
    sequence
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails. An empty sequence yields `true`.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::all;
///
/// assert!(all(&vec![2, 4, 6], |element| element % 2 == 0));
/// assert!(!all(&vec![2, 3, 6], |element| element % 2 == 0));
/// assert!(all(&Vec::<i32>::new(), |_| false));
/// ```
pub fn all<S, P>(sequence: &S, predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    sequence.traverse(predicate)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Defined as `!all(sequence, !predicate)`, so it stops at the first match.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::exist;
///
/// assert!(exist(&vec![1, 2, 3], |element| *element == 2));
/// assert!(!exist(&Vec::<i32>::new(), |_| true));
/// ```
pub fn exist<S, P>(sequence: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    !all(sequence, |element| !predicate(element))
}

/// Returns the first element satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::find;
///
/// let values = vec![1, 5, 10, 15];
/// assert_eq!(find(&values, |element| *element > 7), Some(&10));
/// assert_eq!(find(&values, |element| *element > 70), None);
/// ```
pub fn find<S, P>(sequence: &S, mut predicate: P) -> Option<&S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    sequence
        .create_iterator()
        .elements()
        .find(|&element| predicate(element))
}

/// Returns the 0-based position of the first element satisfying `predicate`.
///
/// `None` plays the role of the conventional `-1` "not found" index.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::position;
///
/// let values = vec!['a', 'b', 'c'];
/// assert_eq!(position(&values, |element| *element == 'c'), Some(2));
/// assert_eq!(position(&values, |element| *element == 'z'), None);
/// ```
pub fn position<S, P>(sequence: &S, mut predicate: P) -> Option<usize>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    sequence
        .create_iterator()
        .elements()
        .position(|element| predicate(element))
}

/// Returns the element at 0-based position `index` in traversal order.
///
/// Returns `None` when `index` is negative or not less than `sequence.size()`.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::nth;
///
/// let values = vec![10, 20, 30];
/// assert_eq!(nth(&values, 1), Some(&20));
/// assert_eq!(nth(&values, -1), None);
/// assert_eq!(nth(&values, 3), None);
/// ```
pub fn nth<S>(sequence: &S, index: isize) -> Option<&S::Item>
where
    S: Sequence,
{
    let index = usize::try_from(index)
        .ok()
        .filter(|&index| index < sequence.size())?;
    sequence.create_iterator().elements().nth(index)
}

/// Folds the sequence from the left.
///
/// Computes `function(... function(function(init, e0), e1) ..., eN)`,
/// visiting elements strictly in traversal order.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::foldl;
///
/// let digits = vec![1, 2, 3];
/// let number = foldl(&digits, 0, |accumulator, digit| accumulator * 10 + digit);
/// assert_eq!(number, 123);
/// ```
pub fn foldl<S, B, F>(sequence: &S, init: B, mut function: F) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Item) -> B,
{
    sequence
        .create_iterator()
        .elements()
        .fold(init, |accumulator, element| function(accumulator, element))
}
