//! # Operations
//!
//! Free functions over borrowed sequences (`&[T]`).
//!
//! - `search` - index lookups, first/last matching
//! - `transform` - map, map_or_default, filter, chunk
//! - `unique` - deduplication by value or by derived key

pub mod search;
pub mod transform;
pub mod unique;

pub use search::{first, index_of, index_of_any, last, last_index_of};
pub use transform::{chunk, filter, map, map_or_default};
pub use unique::{unique, unique_any, unique_by};
