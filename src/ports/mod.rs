//! # Ports
//!
//! Method-call surface for the free functions in [`crate::ops`].
//!
//! [`SequenceExt`] is implemented for `[T]`, so it reaches `Vec<T>`,
//! arrays and slices alike. Method names steer clear of the slice's own
//! `first`, `last` and `chunks`, and `map_each` avoids `Iterator::map`.

use std::hash::Hash;

use crate::core::{EachFn, KeyFn, Predicates, SequenceResult};
use crate::ops;

/// Sequence operations as methods
pub trait SequenceExt<T> {
    /// See [`ops::index_of`]
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`ops::last_index_of`]
    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`ops::index_of_any`]
    fn index_of_any<T2: PartialEq>(
        &self,
        target: &T2,
        mapper: Option<EachFn<'_, T, T2>>,
    ) -> Option<usize>;

    /// See [`ops::unique`]
    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// See [`ops::unique_any`]
    fn unique_any<K: Eq + Hash>(&self, key: Option<KeyFn<'_, T, K>>) -> Vec<T>
    where
        T: Clone + Eq + Hash;

    /// See [`ops::unique_by`]
    fn unique_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(usize, &T) -> K;

    /// See [`ops::map`]
    fn map_each<'s, T2, F>(&'s self, mapper: F) -> Vec<T2>
    where
        T: 's,
        F: FnMut(usize, &'s T) -> T2;

    /// See [`ops::map_or_default`]
    fn map_or_default<T2: Default>(&self, mapper: Option<EachFn<'_, T, T2>>) -> Vec<T2>;

    /// See [`ops::filter`]; predicates that return `true` remove elements
    fn reject(&self, predicates: Predicates<'_, T>) -> Vec<T>
    where
        T: Clone;

    /// See [`ops::chunk`]
    fn chunked(&self, size: usize) -> SequenceResult<Vec<Vec<T>>>
    where
        T: Clone;

    /// See [`ops::first`]
    fn first_where(&self, predicates: Predicates<'_, T>) -> Option<&T>;

    /// See [`ops::last`]
    fn last_where(&self, predicates: Predicates<'_, T>) -> Option<&T>;
}

impl<T> SequenceExt<T> for [T] {
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ops::index_of(self, target)
    }

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ops::last_index_of(self, target)
    }

    fn index_of_any<T2: PartialEq>(
        &self,
        target: &T2,
        mapper: Option<EachFn<'_, T, T2>>,
    ) -> Option<usize> {
        ops::index_of_any(self, target, mapper)
    }

    fn unique(&self) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        ops::unique(self)
    }

    fn unique_any<K: Eq + Hash>(&self, key: Option<KeyFn<'_, T, K>>) -> Vec<T>
    where
        T: Clone + Eq + Hash,
    {
        ops::unique_any(self, key)
    }

    fn unique_by<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(usize, &T) -> K,
    {
        ops::unique_by(self, key)
    }

    fn map_each<'s, T2, F>(&'s self, mapper: F) -> Vec<T2>
    where
        T: 's,
        F: FnMut(usize, &'s T) -> T2,
    {
        ops::map(self, mapper)
    }

    fn map_or_default<T2: Default>(&self, mapper: Option<EachFn<'_, T, T2>>) -> Vec<T2> {
        ops::map_or_default(self, mapper)
    }

    fn reject(&self, predicates: Predicates<'_, T>) -> Vec<T>
    where
        T: Clone,
    {
        ops::filter(self, predicates)
    }

    fn chunked(&self, size: usize) -> SequenceResult<Vec<Vec<T>>>
    where
        T: Clone,
    {
        ops::chunk(self, size)
    }

    fn first_where(&self, predicates: Predicates<'_, T>) -> Option<&T> {
        ops::first(self, predicates)
    }

    fn last_where(&self, predicates: Predicates<'_, T>) -> Option<&T> {
        ops::last(self, predicates)
    }
}
