#![cfg(feature = "combinator")]

//! Example-based tests for the combinator library.
//!
//! Each combinator is exercised on an ordered set of `0..100` and on other
//! container types, to check that results depend only on traversal order.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use funseq::combinator::{
    Pair, all, drop, exist, filter, find, foldl, for_each, map, map_if, nth, position, split,
    take, unzip, zip,
};
use funseq::sequence::Sequence;
use rstest::{fixture, rstest};

const SIZE: i32 = 100;

#[fixture]
fn ordered_set() -> BTreeSet<i32> {
    (0..SIZE).collect()
}

// =============================================================================
// Visiting
// =============================================================================

#[rstest]
fn test_for_each_visits_set_in_ascending_order(ordered_set: BTreeSet<i32>) {
    let mut visited = Vec::new();
    for_each(&ordered_set, |element| visited.push(*element));
    assert_eq!(visited, (0..SIZE).collect::<Vec<_>>());
}

#[rstest]
fn test_for_each_returns_input_for_chaining(ordered_set: BTreeSet<i32>) {
    let mut count = 0;
    let returned = for_each(&ordered_set, |_| count += 1);
    assert_eq!(returned.size(), ordered_set.size());
    assert_eq!(count, SIZE);
}

#[rstest]
fn test_all_and_exist(ordered_set: BTreeSet<i32>) {
    assert!(all(&ordered_set, |element| *element < SIZE));
    assert!(!all(&ordered_set, |element| *element >= SIZE));
    assert!(exist(&ordered_set, |element| *element == SIZE - 1));
    assert!(!exist(&ordered_set, |element| *element >= SIZE));
}

#[rstest]
fn test_all_and_exist_on_empty_sequence() {
    let empty: LinkedList<i32> = LinkedList::new();
    assert!(all(&empty, |_| false));
    assert!(!exist(&empty, |_| true));
}

#[rstest]
fn test_foldl_sum_of_first_hundred(ordered_set: BTreeSet<i32>) {
    assert_eq!(
        foldl(&ordered_set, 0, |accumulator, element| accumulator + element),
        4950
    );
}

#[rstest]
fn test_foldl_on_empty_returns_init() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(foldl(&empty, 7, |accumulator, _| accumulator + 1), 7);
}

// =============================================================================
// Searching
// =============================================================================

#[rstest]
fn test_find(ordered_set: BTreeSet<i32>) {
    assert_eq!(find(&ordered_set, |element| *element == 50), Some(&50));
    assert_eq!(find(&ordered_set, |element| *element >= SIZE), None);
}

#[rstest]
fn test_find_returns_first_match_in_traversal_order() {
    let values: VecDeque<(i32, char)> = [(1, 'a'), (2, 'b'), (2, 'c')].into_iter().collect();
    assert_eq!(find(&values, |(key, _)| *key == 2), Some(&(2, 'b')));
}

#[rstest]
fn test_find_stops_at_match(ordered_set: BTreeSet<i32>) {
    let mut calls = 0;
    find(&ordered_set, |element| {
        calls += 1;
        *element == 3
    });
    assert_eq!(calls, 4);
}

#[rstest]
fn test_nth_bounds(ordered_set: BTreeSet<i32>) {
    assert_eq!(nth(&ordered_set, -1), None);
    assert_eq!(nth(&ordered_set, SIZE as isize), None);
    for index in 0..SIZE {
        assert_eq!(nth(&ordered_set, index as isize), Some(&index));
    }
}

#[rstest]
fn test_position_of_every_element(ordered_set: BTreeSet<i32>) {
    assert_eq!(position(&ordered_set, |element| *element == -1), None);
    assert_eq!(position(&ordered_set, |element| *element == SIZE), None);
    for index in 0..SIZE {
        assert_eq!(
            position(&ordered_set, |element| *element == index),
            Some(index as usize)
        );
    }
}

// =============================================================================
// Building
// =============================================================================

#[rstest]
fn test_map_zipped_with_original(ordered_set: BTreeSet<i32>) {
    let doubled = map(&ordered_set, |element| 2 * element);
    assert!(all(&zip(&ordered_set, &doubled), |pair| 2 * pair.first == pair.second));
}

#[rstest]
fn test_map_if_equals_map_over_filter(ordered_set: BTreeSet<i32>) {
    let predicate = |element: &i32| *element >= 20 && *element <= 60;
    let mapped = map_if(&ordered_set, |element| 2 * element, predicate);
    assert_eq!(mapped, map(&filter(&ordered_set, predicate), |element| 2 * element));
}

#[rstest]
fn test_filter_keeps_order() {
    let list: LinkedList<i32> = [5, 3, 8, 1, 9].into_iter().collect();
    assert_eq!(filter(&list, |element| *element > 2), vec![5, 3, 8, 9]);
}

#[rstest]
fn test_split_partitions(ordered_set: BTreeSet<i32>) {
    let (lower, upper) = split(&ordered_set, |element| *element < SIZE / 2);
    assert!(all(&lower, |element| *element < SIZE / 2));
    assert!(all(&upper, |element| *element >= SIZE / 2));
    assert_eq!(lower.len() + upper.len(), ordered_set.len());
}

#[rstest]
fn test_take_and_drop(ordered_set: BTreeSet<i32>) {
    let head = take(&ordered_set, 10);
    let tail = drop(&ordered_set, 10);
    assert_eq!(head.len(), 10);
    assert_eq!(tail.len(), 90);
    assert!(all(&head, |element| *element <= 9));
    assert!(all(&tail, |element| *element > 9));
}

#[rstest]
#[case(-3)]
#[case(0)]
fn test_take_non_positive_is_empty(ordered_set: BTreeSet<i32>, #[case] count: isize) {
    assert!(take(&ordered_set, count).is_empty());
    assert_eq!(drop(&ordered_set, count).len(), ordered_set.len());
}

#[rstest]
fn test_results_chain_into_further_combinators(ordered_set: BTreeSet<i32>) {
    let result = take(&filter(&map(&ordered_set, |element| element * 3), |element| element % 2 == 0), 4);
    assert_eq!(result, vec![0, 6, 12, 18]);
}

// =============================================================================
// Pairing
// =============================================================================

#[rstest]
fn test_zip_unzip_identical_sets(ordered_set: BTreeSet<i32>) {
    let other = ordered_set.clone();
    let pairs = zip(&ordered_set, &other);
    assert_eq!(pairs.len(), ordered_set.len());
    assert!(all(&pairs, |pair| pair.first == pair.second));

    let (firsts, seconds) = unzip(&pairs);
    assert_eq!(firsts.len(), seconds.len());
    assert_eq!(firsts, seconds);
}

#[rstest]
fn test_zip_drops_trailing_elements() {
    let numbers = vec![1, 2, 3];
    let names: VecDeque<&str> = ["one", "two"].into_iter().collect();
    assert_eq!(
        zip(&numbers, &names),
        vec![Pair::new(1, "one"), Pair::new(2, "two")]
    );
}

#[rstest]
fn test_inputs_are_not_mutated(ordered_set: BTreeSet<i32>) {
    let snapshot = ordered_set.clone();
    let _ = map(&ordered_set, |element| element + 1);
    let _ = filter(&ordered_set, |element| *element > 3);
    let _ = split(&ordered_set, |element| *element > 3);
    assert_eq!(ordered_set, snapshot);
}
