//! Derived lookup structures.
//!
//! Both structures hold positions into the store's record vector rather than
//! copies, so every lookup path resolves to the same owned `Record`.

use std::collections::{BTreeSet, HashMap};

use crate::models::Record;

/// Keyed index and sorted sequence derived from one snapshot of the store.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    keyed: HashMap<u64, usize>,
    sorted: Vec<usize>,
    duplicates: BTreeSet<u64>,
}

impl SearchIndex {
    /// Builds both structures in one pass plus a stable sort.
    ///
    /// Duplicate identifiers resolve last-write-wins in the keyed index and keep
    /// their original relative order in the sorted sequence. They are collected
    /// in `duplicates` for the caller to act on.
    pub fn build(records: &[Record]) -> Self {
        let mut keyed = HashMap::with_capacity(records.len());
        let mut duplicates = BTreeSet::new();
        for (position, record) in records.iter().enumerate() {
            if keyed.insert(record.id, position).is_some() {
                duplicates.insert(record.id);
            }
        }

        let mut sorted: Vec<usize> = (0..records.len()).collect();
        // sort_by_key is stable
        sorted.sort_by_key(|&position| records[position].id);

        Self {
            keyed,
            sorted,
            duplicates,
        }
    }

    /// Position of the record the keyed index resolves `id` to.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.keyed.get(&id).copied()
    }

    /// Record positions in ascending identifier order.
    pub fn sorted_positions(&self) -> &[usize] {
        &self.sorted
    }

    /// Identifiers shared by more than one record.
    pub fn duplicates(&self) -> &BTreeSet<u64> {
        &self.duplicates
    }

    /// Number of distinct identifiers in the keyed index.
    pub fn keyed_len(&self) -> usize {
        self.keyed.len()
    }

    /// Whether the sorted sequence is non-decreasing by identifier.
    pub fn is_sorted(&self, records: &[Record]) -> bool {
        self.sorted
            .windows(2)
            .all(|pair| records[pair[0]].id <= records[pair[1]].id)
    }
}
