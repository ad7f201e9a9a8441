#![cfg(feature = "tuple")]

//! Property-based tests for Tuple reversal and rotation.

use funseq::tuple::Tuple;
use proptest::prelude::*;

/// Generates a `Tuple<i32>` with up to `max_size` elements.
fn tuple_strategy(max_size: usize) -> impl Strategy<Value = Tuple<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(Tuple::from)
}

/// Generates a non-empty tuple together with a valid closed range inside it.
fn tuple_with_range() -> impl Strategy<Value = (Tuple<i32>, usize, usize)> {
    prop::collection::vec(any::<i32>(), 1..30).prop_flat_map(|elements| {
        let size = elements.len();
        (Just(Tuple::from(elements)), 0..size, 0..size)
            .prop_map(|(tuple, first, second)| (tuple, first.min(second), first.max(second)))
    })
}

fn sorted(tuple: &Tuple<i32>) -> Vec<i32> {
    let mut elements = tuple.as_slice().to_vec();
    elements.sort_unstable();
    elements
}

proptest! {
    // =========================================================================
    // Reversal
    // =========================================================================

    #[test]
    fn prop_reverse_twice_is_identity(tuple in tuple_strategy(30)) {
        let mut reversed = tuple.clone();
        reversed.reverse_in_place().reverse_in_place();
        prop_assert_eq!(reversed, tuple);
    }

    #[test]
    fn prop_reverse_matches_slice_reverse(tuple in tuple_strategy(30)) {
        let mut expected = tuple.as_slice().to_vec();
        expected.reverse();
        prop_assert_eq!(tuple.reverse().into_vec(), expected);
    }

    #[test]
    fn prop_reverse_interval_matches_slice((tuple, start, end) in tuple_with_range()) {
        let mut expected = tuple.as_slice().to_vec();
        expected[start..=end].reverse();
        let mut reversed = tuple;
        reversed.reverse_interval(start, end).unwrap();
        prop_assert_eq!(reversed.into_vec(), expected);
    }

    // =========================================================================
    // Rotation
    // =========================================================================

    #[test]
    fn prop_rotate_left_then_right_restores(tuple in tuple_strategy(30), count in 0..30usize) {
        let count = if tuple.is_empty() { 0 } else { count % tuple.size() };
        prop_assert_eq!(tuple.rotate_left(count).rotate_right(count), tuple.clone());
        prop_assert_eq!(tuple.rotate_right(count).rotate_left(count), tuple);
    }

    #[test]
    fn prop_rotation_matches_slice_rotation(tuple in tuple_strategy(30), count in 0..100usize) {
        let mut expected_right = tuple.as_slice().to_vec();
        let mut expected_left = tuple.as_slice().to_vec();
        if !expected_right.is_empty() {
            let reduced = count % expected_right.len();
            expected_right.rotate_left(reduced);
            expected_left.rotate_right(reduced);
        }
        prop_assert_eq!(tuple.rotate_right(count).into_vec(), expected_right);
        prop_assert_eq!(tuple.rotate_left(count).into_vec(), expected_left);
    }

    #[test]
    fn prop_interval_rotation_matches_slice((tuple, start, end) in tuple_with_range(), count in 0..64usize) {
        let mut expected = tuple.as_slice().to_vec();
        let reduced = count % (end - start + 1);
        expected[start..=end].rotate_left(reduced);
        let mut rotated = tuple;
        rotated.rotate_interval_right_in_place(start, end, count).unwrap();
        prop_assert_eq!(rotated.into_vec(), expected);
    }

    #[test]
    fn prop_right_rotation_reverses_around_leading_block((tuple, start, end) in tuple_with_range(), count in 0..64usize) {
        let split = start + count % (end - start + 1);
        let mut expected = tuple.as_slice().to_vec();
        expected[start..split].reverse();
        expected[split..=end].reverse();
        expected[start..=end].reverse();
        let mut rotated = tuple;
        rotated.rotate_interval_right_in_place(start, end, count).unwrap();
        prop_assert_eq!(rotated.into_vec(), expected);
    }

    #[test]
    fn prop_interval_rotation_preserves_members((tuple, start, end) in tuple_with_range(), count in 0..64usize) {
        let mut rotated = tuple.clone();
        rotated.rotate_interval_left_in_place(start, end, count).unwrap();
        prop_assert_eq!(rotated.size(), tuple.size());
        prop_assert_eq!(sorted(&rotated), sorted(&tuple));
        prop_assert_eq!(&rotated.as_slice()[..start], &tuple.as_slice()[..start]);
        prop_assert_eq!(&rotated.as_slice()[end + 1..], &tuple.as_slice()[end + 1..]);
    }

    #[test]
    fn prop_swap_exchanges_contents(left in tuple_strategy(20), right in tuple_strategy(20)) {
        let mut swapped_left = left.clone();
        let mut swapped_right = right.clone();
        swapped_left.swap(&mut swapped_right);
        prop_assert_eq!(swapped_left, right);
        prop_assert_eq!(swapped_right, left);
    }
}
