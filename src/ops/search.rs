//! # Search
//!
//! Positional lookups and first/last matching.
//!
//! Every lookup reports "not found" as `None`. `first` and `last` do not
//! fall back to the sequence's real first/last element when predicates were
//! supplied and none of them matched.

use crate::core::{EachFn, Predicates};

/// Position of the first element equal to `target`
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}

/// Position of the last element equal to `target`
///
/// Scans forward over the whole sequence, remembering the latest match.
pub fn last_index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    let mut index = None;
    for (i, item) in seq.iter().enumerate() {
        if item == target {
            index = Some(i);
        }
    }
    index
}

/// Position of the first element whose mapped value equals `target`
///
/// Without a mapper nothing can match, so the sequence is not scanned.
pub fn index_of_any<T, T2: PartialEq>(
    seq: &[T],
    target: &T2,
    mapper: Option<EachFn<'_, T, T2>>,
) -> Option<usize> {
    let mapper = mapper?;
    seq.iter()
        .enumerate()
        .position(|(i, item)| mapper(i, item) == *target)
}

/// First element picked by any predicate
///
/// With no predicates at all this is simply the first element. Otherwise
/// predicates are tried in order on each element and the scan stops at the
/// first element any of them picks.
pub fn first<'s, T>(seq: &'s [T], mut predicates: Predicates<'_, T>) -> Option<&'s T> {
    if predicates.is_empty() {
        return seq.first();
    }

    seq.iter()
        .enumerate()
        .find(|(i, item)| predicates.selects(*i, item))
        .map(|(_, item)| item)
}

/// Last element picked by any predicate
///
/// With no predicates at all this is simply the last element. Otherwise the
/// whole sequence is scanned and every predicate sees every element; the
/// most recent pick wins.
pub fn last<'s, T>(seq: &'s [T], mut predicates: Predicates<'_, T>) -> Option<&'s T> {
    if predicates.is_empty() {
        return seq.last();
    }

    let mut found = None;
    for (i, item) in seq.iter().enumerate() {
        if predicates.selects_exhaustive(i, item) {
            found = Some(item);
        }
    }
    found
}
