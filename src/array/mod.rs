//! Array-backed operations over a vector of keys.
//!
//! Searches return `None` on a miss; nothing here allocates beyond what
//! `Vec::insert` needs.

pub mod mutate;
pub mod search;

pub use mutate::{delete, ordered_insert, sort, unordered_append};
pub use search::{binary_search, insertion_point, linear_search};
