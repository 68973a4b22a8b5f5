//! # Adapters
//!
//! Bindings that carry the sequence operations across a language boundary.
//!
//! - Python bindings (when the `python` feature is enabled)
//!
//! Adapters only translate: element equality, hashing and "absent"
//! callables are mapped onto the core operations, never reimplemented.

#[cfg(feature = "python")]
pub mod python;
