//! # Transform
//!
//! Operations that build a new sequence from an input sequence: `map`,
//! `map_or_default`, `filter` and `chunk`. The input is never modified.

use crate::core::{EachFn, Predicates, SequenceError, SequenceResult};

/// Map every element through `mapper`, keeping order and length
///
/// The mapper may borrow from the elements it is given. An empty input yields
/// an empty output and the mapper is never called.
pub fn map<'s, T, T2, F>(seq: &'s [T], mut mapper: F) -> Vec<T2>
where
    F: FnMut(usize, &'s T) -> T2,
{
    seq.iter()
        .enumerate()
        .map(|(i, item)| mapper(i, item))
        .collect()
}

/// `map` with an optional mapper
///
/// Without a mapper every output element is `T2::default()`.
pub fn map_or_default<T, T2: Default>(seq: &[T], mapper: Option<EachFn<'_, T, T2>>) -> Vec<T2> {
    match mapper {
        Some(mapper) => map(seq, mapper),
        None => seq.iter().map(|_| T2::default()).collect(),
    }
}

/// Keep the elements that no predicate rejects
///
/// This is a *reject* filter: an element is dropped as soon as any present
/// predicate returns `true` for it. With no predicates every element is kept.
pub fn filter<T: Clone>(seq: &[T], mut predicates: Predicates<'_, T>) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|(i, item)| !predicates.rejects(*i, item))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Split into consecutive groups of `size` elements
///
/// The final group holds the remainder and may be shorter. An empty input
/// yields no groups. `size` must be at least 1.
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> SequenceResult<Vec<Vec<T>>> {
    if size == 0 {
        #[cfg(feature = "log")]
        log::debug!("rejecting chunk size 0 for a sequence of {} elements", seq.len());
        return Err(SequenceError::InvalidChunkSize { size });
    }

    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}
