//! # Python Bindings
//!
//! PyO3 bindings exposing the sequence operations to Python.
//!
//! ## Python API
//!
//! ```python
//! import collectz
//!
//! collectz.index_of([3, 1, 4, 1], 1)            # 1
//! collectz.last_index_of([3, 1, 4, 1], 1)       # 3
//! collectz.index_of_any(["a", "bb"], 2, len_of) # 1, len_of = lambda i, s: len(s)
//! collectz.unique([1, 2, 2, 3, 1])              # [1, 2, 3]
//! collectz.unique_any(words, lambda i, w: w[0])
//! collectz.map([1, 2], lambda i, x: x * 10)     # [10, 20]
//! collectz.filter([1, 2, 3, 4], is_even)        # [1, 3] - predicates reject
//! collectz.chunk([1, 2, 3, 4, 5], 2)            # [[1, 2], [3, 4], [5]]
//! collectz.first([1, 2, 3, 4], gt2)             # (3, True)
//! collectz.last([1, 2], gt5)                    # (None, False)
//! ```
//!
//! Callables receive `(index, element)`. Passing `None` where a callable is
//! expected means "absent". Lookups that find nothing return `-1`, or
//! `(None, False)` for `first`/`last`. The first exception raised by a
//! callable aborts the operation and is re-raised.

use std::cell::RefCell;
use std::hash::{Hash, Hasher};

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;

use crate::core::{Predicates, SequenceError};
use crate::ops;

impl From<SequenceError> for PyErr {
    fn from(err: SequenceError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Remembers the first exception raised by a callback
///
/// The core operations take infallible callbacks; a tripped trap turns every
/// later callback into a no-op returning its fallback.
struct Trap {
    err: RefCell<Option<PyErr>>,
}

impl Trap {
    fn new() -> Self {
        Self { err: RefCell::new(None) }
    }

    fn guard<T>(&self, call: impl FnOnce() -> PyResult<T>, fallback: T) -> T {
        if self.err.borrow().is_some() {
            return fallback;
        }

        match call() {
            Ok(value) => value,
            Err(err) => {
                #[cfg(feature = "log")]
                log::debug!("python callback raised, aborting operation: {}", err);
                *self.err.borrow_mut() = Some(err);
                fallback
            }
        }
    }

    fn finish<T>(self, value: T) -> PyResult<T> {
        match self.err.into_inner() {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

/// A Python object usable as a Rust hash key
///
/// Hashes with Python's `hash()`; compares with identity, then `==`.
struct PyKey<'py> {
    obj: Bound<'py, PyAny>,
    hash: isize,
}

impl<'py> PyKey<'py> {
    fn new(obj: Bound<'py, PyAny>) -> PyResult<Self> {
        let hash = obj.hash()?;
        Ok(Self { obj, hash })
    }
}

impl PartialEq for PyKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        // A raising __eq__ counts as "different"
        self.obj.is(&other.obj) || self.obj.eq(&other.obj).unwrap_or(false)
    }
}

impl Eq for PyKey<'_> {}

impl Hash for PyKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_isize(self.hash);
    }
}

/// Map a lookup result to Python's `-1` convention
fn sentinel(index: Option<usize>) -> isize {
    index.map_or(-1, |i| i as isize)
}

fn call_predicate(
    callable: &Bound<'_, PyAny>,
    index: usize,
    item: &Bound<'_, PyAny>,
) -> PyResult<bool> {
    callable.call1((index, item.clone()))?.is_truthy()
}

/// Turn a tuple of callables (or `None`s) into a predicate list
fn predicates<'a, 'py: 'a>(
    callables: &Bound<'py, PyTuple>,
    trap: &'a Trap,
) -> Predicates<'a, Bound<'py, PyAny>> {
    let mut list = Predicates::new();
    for callable in callables.iter() {
        if callable.is_none() {
            list.push(None);
            continue;
        }
        list.push(Some(Box::new(move |i: usize, item: &Bound<'py, PyAny>| {
            trap.guard(|| call_predicate(&callable, i, item), false)
        })));
    }
    list
}

/// Position of the first element `== target`, or -1
#[pyfunction]
fn index_of<'py>(seq: Vec<Bound<'py, PyAny>>, target: Bound<'py, PyAny>) -> PyResult<isize> {
    let trap = Trap::new();
    let mut equals = |_: usize, item: &Bound<'py, PyAny>| trap.guard(|| item.eq(&target), false);

    let index = ops::index_of_any(&seq, &true, Some(&mut equals));
    trap.finish(sentinel(index))
}

/// Position of the last element `== target`, or -1
#[pyfunction]
fn last_index_of<'py>(seq: Vec<Bound<'py, PyAny>>, target: Bound<'py, PyAny>) -> PyResult<isize> {
    let trap = Trap::new();
    let equals = |_: usize, item: &Bound<'py, PyAny>| trap.guard(|| item.eq(&target), false);

    let hits = ops::map(&seq, equals);
    trap.finish(sentinel(ops::last_index_of(&hits, &true)))
}

/// Position of the first element whose `func(index, element) == target`, or -1
#[pyfunction]
#[pyo3(signature = (seq, target, func=None))]
fn index_of_any<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    target: Bound<'py, PyAny>,
    func: Option<Bound<'py, PyAny>>,
) -> PyResult<isize> {
    let Some(func) = func else {
        return Ok(-1);
    };

    let trap = Trap::new();
    let mut matches = |i: usize, item: &Bound<'py, PyAny>| {
        trap.guard(|| func.call1((i, item.clone()))?.eq(&target), false)
    };

    let index = ops::index_of_any(&seq, &true, Some(&mut matches));
    trap.finish(sentinel(index))
}

/// Elements with later duplicates removed
#[pyfunction]
fn unique<'py>(seq: Vec<Bound<'py, PyAny>>) -> PyResult<Vec<Bound<'py, PyAny>>> {
    let trap = Trap::new();
    let kept = ops::unique_by(&seq, |_, item: &Bound<'py, PyAny>| {
        trap.guard(|| PyKey::new(item.clone()).map(Some), None)
    });
    trap.finish(kept)
}

/// Elements whose `func(index, element)` key was not seen before
#[pyfunction]
#[pyo3(signature = (seq, func=None))]
fn unique_any<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    func: Option<Bound<'py, PyAny>>,
) -> PyResult<Vec<Bound<'py, PyAny>>> {
    let Some(func) = func else {
        return unique(seq);
    };

    let trap = Trap::new();
    let kept = ops::unique_by(&seq, |i, item: &Bound<'py, PyAny>| {
        trap.guard(|| PyKey::new(func.call1((i, item.clone()))?).map(Some), None)
    });
    trap.finish(kept)
}

/// `func(index, element)` for every element; all `None` without `func`
#[pyfunction]
#[pyo3(signature = (seq, func=None))]
fn map<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    func: Option<Bound<'py, PyAny>>,
) -> PyResult<Vec<Option<Bound<'py, PyAny>>>> {
    let Some(func) = func else {
        return Ok(ops::map_or_default(&seq, None));
    };

    let trap = Trap::new();
    let mapped = ops::map(&seq, |i, item: &Bound<'py, PyAny>| {
        trap.guard(|| func.call1((i, item.clone())).map(Some), None)
    });
    trap.finish(mapped)
}

/// Elements that no predicate returns true for
#[pyfunction]
#[pyo3(signature = (seq, *predicates))]
fn filter<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    predicates: &Bound<'py, PyTuple>,
) -> PyResult<Vec<Bound<'py, PyAny>>> {
    let trap = Trap::new();
    let kept = ops::filter(&seq, self::predicates(predicates, &trap));
    trap.finish(kept)
}

/// Consecutive groups of `size` elements
#[pyfunction]
fn chunk<'py>(seq: Vec<Bound<'py, PyAny>>, size: usize) -> PyResult<Vec<Vec<Bound<'py, PyAny>>>> {
    Ok(ops::chunk(&seq, size)?)
}

/// `(element, True)` for the first element any predicate accepts
#[pyfunction]
#[pyo3(signature = (seq, *predicates))]
fn first<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    predicates: &Bound<'py, PyTuple>,
) -> PyResult<(Option<Bound<'py, PyAny>>, bool)> {
    let trap = Trap::new();
    let found = ops::first(&seq, self::predicates(predicates, &trap)).cloned();
    let found_any = found.is_some();
    trap.finish((found, found_any))
}

/// `(element, True)` for the last element any predicate accepts
#[pyfunction]
#[pyo3(signature = (seq, *predicates))]
fn last<'py>(
    seq: Vec<Bound<'py, PyAny>>,
    predicates: &Bound<'py, PyTuple>,
) -> PyResult<(Option<Bound<'py, PyAny>>, bool)> {
    let trap = Trap::new();
    let found = ops::last(&seq, self::predicates(predicates, &trap)).cloned();
    let found_any = found.is_some();
    trap.finish((found, found_any))
}

/// collectz Python module
#[pymodule]
pub fn collectz(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(index_of, m)?)?;
    m.add_function(wrap_pyfunction!(last_index_of, m)?)?;
    m.add_function(wrap_pyfunction!(index_of_any, m)?)?;
    m.add_function(wrap_pyfunction!(unique, m)?)?;
    m.add_function(wrap_pyfunction!(unique_any, m)?)?;
    m.add_function(wrap_pyfunction!(map, m)?)?;
    m.add_function(wrap_pyfunction!(filter, m)?)?;
    m.add_function(wrap_pyfunction!(chunk, m)?)?;
    m.add_function(wrap_pyfunction!(first, m)?)?;
    m.add_function(wrap_pyfunction!(last, m)?)?;

    m.add(
        "__doc__",
        "collectz: index-of, unique, map, filter, chunk and first/last over sequences",
    )?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
