//! Property tests for the sequence operations.

use std::collections::HashSet;

use collectz::{
    chunk, filter, first, index_of, last, last_index_of, map, map_or_default, unique, Predicates,
};
use proptest::prelude::*;

fn small_seq() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..16, 0..64)
}

proptest! {
    #[test]
    fn index_of_is_min_position(seq in small_seq(), target in 0u8..16) {
        let positions: Vec<usize> = seq
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == target)
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(index_of(&seq, &target), positions.first().copied());
        prop_assert_eq!(last_index_of(&seq, &target), positions.last().copied());
    }

    #[test]
    fn map_preserves_length(seq in small_seq()) {
        let mut double = |_: usize, x: &u8| u16::from(*x) * 2;

        prop_assert_eq!(map(&seq, &mut double).len(), seq.len());
        prop_assert_eq!(map_or_default::<u8, u16>(&seq, Some(&mut double)).len(), seq.len());
        prop_assert_eq!(map_or_default::<u8, u16>(&seq, None).len(), seq.len());
    }

    #[test]
    fn filter_without_predicates_is_identity(seq in small_seq()) {
        prop_assert_eq!(filter(&seq, Predicates::new()), seq);
    }

    #[test]
    fn filter_removes_exactly_the_matches(seq in small_seq(), pivot in 0u8..16) {
        let expected: Vec<u8> = seq.iter().copied().filter(|x| *x < pivot).collect();

        let kept = filter(&seq, Predicates::new().with(|_, x: &u8| *x >= pivot));

        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn unique_is_idempotent_and_ordered(seq in small_seq()) {
        let once = unique(&seq);

        prop_assert_eq!(unique(&once), once.clone());

        let distinct: HashSet<u8> = once.iter().copied().collect();
        prop_assert_eq!(distinct.len(), once.len());

        let mut seen = HashSet::new();
        let first_occurrences: Vec<u8> = seq.iter().copied().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(once, first_occurrences);
    }

    #[test]
    fn chunk_reconstructs_input(seq in small_seq(), size in 1usize..10) {
        let chunks = chunk(&seq, size).unwrap();

        prop_assert_eq!(chunks.len(), seq.len().div_ceil(size));
        if let Some((tail, full)) = chunks.split_last() {
            prop_assert!(full.iter().all(|c| c.len() == size));
            prop_assert!(!tail.is_empty() && tail.len() <= size);
        }
        prop_assert_eq!(chunks.concat(), seq);
    }

    #[test]
    fn first_and_last_without_predicates(seq in small_seq()) {
        prop_assert_eq!(first(&seq, Predicates::new()), seq.first());
        prop_assert_eq!(last(&seq, Predicates::new()), seq.last());
    }

    #[test]
    fn first_and_last_agree_with_positions(seq in small_seq(), target in 0u8..16) {
        let found_first = first(&seq, Predicates::new().with(|_, x: &u8| *x == target));
        let found_last = last(&seq, Predicates::new().with(|_, x: &u8| *x == target));

        let present = seq.contains(&target);
        prop_assert_eq!(found_first.is_some(), present);
        prop_assert_eq!(found_last.is_some(), present);
        if present {
            let first_at = index_of(&seq, &target).unwrap();
            let last_at = last_index_of(&seq, &target).unwrap();
            prop_assert!(std::ptr::eq(found_first.unwrap(), &seq[first_at]));
            prop_assert!(std::ptr::eq(found_last.unwrap(), &seq[last_at]));
        }
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(filter(&[1, 2, 3, 4], Predicates::new().with(|_, x: &i32| x % 2 == 0)), vec![1, 3]);
    assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);

    let greater_than = |n: i32| move |_: usize, x: &i32| *x > n;
    assert_eq!(first(&[1, 2, 3, 4], Predicates::new().with(greater_than(2))), Some(&3));
    assert_eq!(last(&[1, 2, 3, 4], Predicates::new().with(greater_than(2))), Some(&4));
    assert_eq!(first(&[1, 2], Predicates::new().with(greater_than(5))), None);
    assert_eq!(first::<i32>(&[], Predicates::new()), None);
}
