//! # Predicates
//!
//! Callback shapes shared by every operation, and the ordered list of
//! optional predicates that `filter`, `first` and `last` accept.
//!
//! The same list is applied in two opposite senses:
//!
//! - [`Predicates::rejects`] - exclude-if-any-match (`filter`)
//! - [`Predicates::selects`] - select-if-any-match (`first`, `last`)
//!
//! A predicate returning `true` therefore *removes* an element from a
//! `filter` result but *picks* it for `first`/`last`.

use std::fmt;

/// A predicate over `(index, element)`
pub type FilterFn<'a, T> = Box<dyn FnMut(usize, &T) -> bool + 'a>;

/// A mapper from `(index, element)` to a value of another type
pub type EachFn<'a, T, T2> = &'a mut dyn FnMut(usize, &T) -> T2;

/// A key extractor used by the uniqueness operations
pub type KeyFn<'a, T, K> = &'a mut dyn FnMut(usize, &T) -> K;

/// An ordered list of optional predicates
///
/// Absent entries are kept: they count toward [`len`](Self::len) but never
/// match anything.
pub struct Predicates<'a, T> {
    fns: Vec<Option<FilterFn<'a, T>>>,
}

impl<'a, T> Predicates<'a, T> {
    /// An empty list
    pub fn new() -> Self {
        Self { fns: Vec::new() }
    }

    /// Append a predicate
    pub fn with<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(usize, &T) -> bool + 'a,
    {
        self.fns.push(Some(Box::new(predicate)));
        self
    }

    /// Append a predicate that may be absent
    pub fn with_optional<F>(mut self, predicate: Option<F>) -> Self
    where
        F: FnMut(usize, &T) -> bool + 'a,
    {
        self.fns
            .push(predicate.map(|p| Box::new(p) as FilterFn<'a, T>));
        self
    }

    /// Append an already boxed, possibly absent predicate
    pub fn push(&mut self, predicate: Option<FilterFn<'a, T>>) {
        self.fns.push(predicate);
    }

    /// Number of entries, absent ones included
    pub fn len(&self) -> usize {
        self.fns.len()
    }

    /// True when no entries were supplied at all
    pub fn is_empty(&self) -> bool {
        self.fns.is_empty()
    }

    /// Exclude-if-any-match: true when some present predicate votes to
    /// remove the element. Stops at the first such vote.
    pub fn rejects(&mut self, index: usize, item: &T) -> bool {
        self.any_match(index, item)
    }

    /// Select-if-any-match: true when some present predicate picks the
    /// element. Stops at the first pick, so later predicates are not called.
    pub fn selects(&mut self, index: usize, item: &T) -> bool {
        self.any_match(index, item)
    }

    /// Select-if-any-match without short-circuit: every present predicate
    /// sees the element.
    pub fn selects_exhaustive(&mut self, index: usize, item: &T) -> bool {
        let mut selected = false;
        for predicate in self.fns.iter_mut().flatten() {
            if predicate(index, item) {
                selected = true;
            }
        }
        selected
    }

    fn any_match(&mut self, index: usize, item: &T) -> bool {
        self.fns
            .iter_mut()
            .flatten()
            .any(|predicate| predicate(index, item))
    }
}

impl<T> Default for Predicates<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Predicates<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = self.fns.iter().filter(|p| p.is_some()).count();
        f.debug_struct("Predicates")
            .field("len", &self.fns.len())
            .field("present", &present)
            .finish()
    }
}
