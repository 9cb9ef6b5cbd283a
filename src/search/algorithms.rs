//! The three lookup algorithms.

use std::cmp::Ordering;

use crate::models::Record;
use crate::store::SearchIndex;

/// Returns the first record whose identifier matches.
pub fn linear_search(records: &[Record], id: u64) -> Option<&Record> {
    records.iter().find(|record| record.id == id)
}

/// Single probe into the keyed index.
pub fn dictionary_lookup<'a>(index: &SearchIndex, records: &'a [Record], id: u64) -> Option<&'a Record> {
    index.position_of(id).and_then(|position| records.get(position))
}

/// Bisection over the sorted sequence.
///
/// Requires `index.sorted_positions()` to be ordered by ascending identifier.
pub fn binary_search<'a>(index: &SearchIndex, records: &'a [Record], id: u64) -> Option<&'a Record> {
    let sorted = index.sorted_positions();
    let mut low = 0usize;
    let mut high = sorted.len().checked_sub(1)?;

    while low <= high {
        // floor((low + high) / 2) without overflow
        let mid = low + (high - low) / 2;
        let candidate = records.get(sorted[mid])?;
        match candidate.id.cmp(&id) {
            Ordering::Equal => return Some(candidate),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }
    None
}
