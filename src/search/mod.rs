//! Search strategies.
//!
//! Three algorithms locate a record by identifier, each over a different
//! representation of the same store:
//! - linear scan over the insertion-ordered records
//! - keyed lookup through the identifier map
//! - binary search over the identifier-sorted sequence

mod algorithms;
mod strategy;

pub use algorithms::{binary_search, dictionary_lookup, linear_search};
pub use strategy::Strategy;
