//! Dataset loading.
//!
//! This module provides:
//! - Loading transactions from a JSON file (array of objects)
//! - A fixed sample dataset for demos
//!
//! Loading never fails: an unreadable or malformed file yields an empty list
//! so the engine can still start.

mod loader;

pub use loader::{load_transactions, read_transactions, sample_transactions};
