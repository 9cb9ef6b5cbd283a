//! Lookup strategy identifiers.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::models::Record;
use crate::store::RecordStore;

use super::algorithms::{binary_search, dictionary_lookup, linear_search};

/// One of the three interchangeable lookup algorithms.
///
/// Declaration order is the order strategies appear in reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Front-to-back scan of the record sequence
    LinearSearch,
    /// Single probe into the keyed index
    DictionaryLookup,
    /// Bisection over the sorted sequence
    BinarySearch,
}

impl Strategy {
    /// Precedence used to break ties when picking the fastest strategy.
    pub const FASTEST_PRECEDENCE: [Strategy; 3] = [
        Strategy::DictionaryLookup,
        Strategy::BinarySearch,
        Strategy::LinearSearch,
    ];

    /// Precedence used to break ties when picking the slowest strategy.
    pub const SLOWEST_PRECEDENCE: [Strategy; 3] = [
        Strategy::LinearSearch,
        Strategy::BinarySearch,
        Strategy::DictionaryLookup,
    ];

    /// Locates a record by identifier using this strategy.
    pub fn locate(self, store: &RecordStore, id: u64) -> Option<&Record> {
        match self {
            Strategy::LinearSearch => linear_search(store.records(), id),
            Strategy::DictionaryLookup => dictionary_lookup(store.index(), store.records(), id),
            Strategy::BinarySearch => binary_search(store.index(), store.records(), id),
        }
    }

    /// Nominal time complexity.
    pub fn time_complexity(self) -> &'static str {
        match self {
            Strategy::LinearSearch => "O(n)",
            Strategy::DictionaryLookup => "O(1)",
            Strategy::BinarySearch => "O(log n)",
        }
    }

    /// Nominal auxiliary space complexity.
    pub fn space_complexity(self) -> &'static str {
        match self {
            Strategy::LinearSearch => "O(1)",
            Strategy::DictionaryLookup => "O(n)",
            Strategy::BinarySearch => "O(1)",
        }
    }

    /// Human-readable name ("Linear Search").
    pub fn title(self) -> &'static str {
        match self {
            Strategy::LinearSearch => "Linear Search",
            Strategy::DictionaryLookup => "Dictionary Lookup",
            Strategy::BinarySearch => "Binary Search",
        }
    }
}
