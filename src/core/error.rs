//! # Errors
//!
//! Almost every operation in this crate is total: a missing match is reported
//! through `Option`, a missing callback degrades to a defined fallback. The
//! one precondition that can be violated is the chunk size.

use thiserror::Error;

/// Errors raised by sequence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `chunk` was asked for groups of zero elements
    #[error("invalid chunk size {size}: size must be at least 1")]
    InvalidChunkSize { size: usize },
}

/// Result type for fallible sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;
