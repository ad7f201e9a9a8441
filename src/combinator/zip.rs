//! Pairing two sequences element-wise, and splitting pairs back apart.

use crate::sequence::{Sequence, SequentialIterator};

use super::pair::Pair;
use super::traversal::for_each;

/// Pairs the elements of two sequences position by position.
///
/// The result is as long as the shorter input; trailing elements of the
/// longer one are dropped.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::{zip, Pair};
///
/// let pairs = zip(&vec![1, 2, 3], &vec!['a', 'b']);
/// assert_eq!(pairs, vec![Pair::new(1, 'a'), Pair::new(2, 'b')]);
/// ```
pub fn zip<S1, S2>(first: &S1, second: &S2) -> Vec<Pair<S1::Item, S2::Item>>
where
    S1: Sequence,
    S2: Sequence,
    S1::Item: Clone,
    S2::Item: Clone,
{
    first
        .create_iterator()
        .elements()
        .zip(second.create_iterator().elements())
        .map(|(left, right)| Pair::new(left.clone(), right.clone()))
        .collect()
}

/// Splits a sequence of pairs into the sequence of first components and the
/// sequence of second components.
///
/// # Examples
///
/// ```rust
/// use funseq::combinator::{unzip, zip};
///
/// let numbers = vec![1, 2, 3];
/// let letters = vec!['x', 'y', 'z'];
/// let (left, right) = unzip(&zip(&numbers, &letters));
/// assert_eq!(left, numbers);
/// assert_eq!(right, letters);
/// ```
pub fn unzip<S, A, B>(pairs: &S) -> (Vec<A>, Vec<B>)
where
    S: Sequence<Item = Pair<A, B>>,
    A: Clone,
    B: Clone,
{
    let mut firsts = Vec::with_capacity(pairs.size());
    let mut seconds = Vec::with_capacity(pairs.size());
    for_each(pairs, |pair| {
        firsts.push(pair.first.clone());
        seconds.push(pair.second.clone());
    });
    (firsts, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::all;
    use rstest::rstest;
    use std::collections::{BTreeSet, VecDeque};

    #[rstest]
    fn test_zip_identical_sets() {
        let left: BTreeSet<i32> = (0..100).collect();
        let right: BTreeSet<i32> = (0..100).collect();
        let pairs = zip(&left, &right);
        assert_eq!(pairs.len(), 100);
        assert!(all(&pairs, |pair| pair.first == pair.second));

        let (firsts, seconds) = unzip(&pairs);
        assert_eq!(firsts.len(), seconds.len());
        assert_eq!(firsts, seconds);
    }

    #[rstest]
    #[case(vec![], vec![1, 2], 0)]
    #[case(vec![1, 2, 3], vec![1], 1)]
    #[case(vec![1, 2], vec![1, 2, 3, 4], 2)]
    fn test_zip_truncates_to_shorter(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: usize,
    ) {
        assert_eq!(zip(&left, &right).len(), expected);
    }

    #[rstest]
    fn test_zip_across_container_types() {
        let deque: VecDeque<&str> = ["a", "b"].into_iter().collect();
        let pairs = zip(&deque, &vec![1.5, 2.5]);
        assert_eq!(pairs[1], Pair::new("b", 2.5));
    }

    #[rstest]
    fn test_unzip_empty() {
        let pairs: Vec<Pair<i32, char>> = Vec::new();
        let (firsts, seconds) = unzip(&pairs);
        assert!(firsts.is_empty());
        assert!(seconds.is_empty());
    }
}
