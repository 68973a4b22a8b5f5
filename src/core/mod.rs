//! # Core
//!
//! Callback types and errors shared by every operation. No I/O, no state.

pub mod error;
pub mod predicate;

pub use error::{SequenceError, SequenceResult};
pub use predicate::{EachFn, FilterFn, KeyFn, Predicates};
