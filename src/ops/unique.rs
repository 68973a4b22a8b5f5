//! # Unique
//!
//! First-occurrence-wins deduplication, built on [`filter`]: the predicate
//! remembers every key it has seen and rejects an element whose key was
//! already there.

use std::collections::HashSet;
use std::hash::Hash;

use crate::core::{KeyFn, Predicates};
use crate::ops::transform::filter;

/// Drop every element equal to an earlier one
pub fn unique<T: Clone + Eq + Hash>(seq: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    filter(
        seq,
        Predicates::new().with(move |_, item: &T| !seen.insert(item.clone())),
    )
}

/// Drop every element whose key equals the key of an earlier one
pub fn unique_by<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    let mut seen = HashSet::new();
    filter(
        seq,
        Predicates::new().with(move |i, item: &T| !seen.insert(key(i, item))),
    )
}

/// `unique_by` with an optional key extractor
///
/// Without an extractor the element itself is the key, which is why `T` must
/// be `Eq + Hash` here even when an extractor is supplied. For elements that
/// are not hashable (`f64`, structs without `Hash`) use [`unique_by`], which
/// only needs the key to be hashable.
///
/// Passing `None` leaves `K` unconstrained, so name it with a turbofish:
///
/// ```
/// use collectz::unique_any;
///
/// assert_eq!(unique_any::<&str, ()>(&["x", "y", "x"], None), vec!["x", "y"]);
/// ```
pub fn unique_any<T, K>(seq: &[T], key: Option<KeyFn<'_, T, K>>) -> Vec<T>
where
    T: Clone + Eq + Hash,
    K: Eq + Hash,
{
    match key {
        Some(key) => unique_by(seq, key),
        None => unique(seq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique() {
        assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
        assert_eq!(unique(&["b", "a", "b"]), vec!["b", "a"]);
        assert!(unique::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_unique_is_idempotent() {
        let once = unique(&[4, 4, 1, 9, 1, 4]);

        assert_eq!(unique(&once), once);
    }

    #[test]
    fn test_unique_by_key() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];

        let by_initial = unique_by(&words, |_, w: &&str| w.chars().next());

        assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_unique_by_index_key() {
        let seq = [7, 7, 7, 7];

        let out = unique_by(&seq, |i, _: &i32| i / 2);

        assert_eq!(out, vec![7, 7]);
    }

    #[test]
    fn test_unique_by_unhashable_elements() {
        let seq = [1.5_f64, 1.25, 2.5, 1.75];

        let out = unique_by(&seq, |_, x: &f64| x.floor() as i64);

        assert_eq!(out, vec![1.5, 2.5]);
    }

    #[test]
    fn test_unique_any_with_key() {
        let seq = [10, 21, 30, 41];
        let mut parity = |_: usize, x: &i32| x % 2;

        assert_eq!(unique_any::<i32, i32>(&seq, Some(&mut parity)), vec![10, 21]);
    }

    #[test]
    fn test_unique_any_defaults_to_identity() {
        let seq = ["x", "y", "x"];

        assert_eq!(unique_any::<&str, ()>(&seq, None), vec!["x", "y"]);
    }
}
