//! # collectz - Sequence Utilities
//!
//! Small, stateless operations over ordered in-memory sequences: index-of,
//! unique, map, filter, chunk and first/last-matching. Every operation reads a
//! borrowed slice, calls the caller's `(index, element)` callbacks, and
//! returns a freshly allocated result. Nothing is cached between calls.
//!
//! ## Conventions
//!
//! - **Not found is `None`** - lookups return `Option<usize>` / `Option<&T>`
//! - **Absent callbacks degrade** - a missing predicate never matches, a
//!   missing mapper (`map_or_default`) yields `T2::default()`, a missing key
//!   extractor keys by the element itself
//! - **`filter` rejects** - a predicate returning `true` *removes* the
//!   element, while `first`/`last` *select* on `true`
//! - **Only `chunk` can fail** - a chunk size of zero is an error
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        collectz                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (callback types, errors)                              │
//! │    Predicates, EachFn, KeyFn, SequenceError                 │
//! │                                                              │
//! │  OPS (free functions over &[T])                             │
//! │    search, transform, unique                                │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    SequenceExt                                               │
//! │                                                              │
//! │  ADAPTERS (language bindings)                               │
//! │    Python                                                    │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use collectz::{Predicates, SequenceExt};
//!
//! let seq = vec![1, 2, 2, 3, 4, 1];
//!
//! assert_eq!(seq.unique(), vec![1, 2, 3, 4]);
//! assert_eq!(seq.index_of(&3), Some(3));
//! assert_eq!(seq.chunked(4).unwrap(), vec![vec![1, 2, 2, 3], vec![4, 1]]);
//!
//! // filter removes what the predicates match
//! let odd = seq.reject(Predicates::new().with(|_, x: &i32| x % 2 == 0));
//! assert_eq!(odd, vec![1, 3, 1]);
//!
//! // first/last keep what the predicates match
//! let big = seq.last_where(Predicates::new().with(|_, x: &i32| *x > 2));
//! assert_eq!(big, Some(&4));
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - callback types and errors
/// Contains: Predicates, FilterFn, EachFn, KeyFn, SequenceError
pub mod core;

/// Operations - free functions over slices
/// Contains: search, transform, unique submodules
pub mod ops;

/// Port definitions - trait contracts
/// Contains: SequenceExt trait
pub mod ports;

/// Adapter implementations - language bindings
/// Contains: python submodule
pub mod adapters;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{EachFn, FilterFn, KeyFn, Predicates};
pub use crate::core::{SequenceError, SequenceResult};

// Operations
pub use crate::ops::{chunk, filter, first, index_of, index_of_any, last, last_index_of};
pub use crate::ops::{map, map_or_default};
pub use crate::ops::{unique, unique_any, unique_by};

// Port traits
pub use crate::ports::SequenceExt;
