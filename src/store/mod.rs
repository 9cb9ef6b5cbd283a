//! Record store and its derived indices.
//!
//! `RecordStore` owns the canonical record sequence. The keyed index and the
//! sorted sequence are derived views held in a [`SearchIndex`] and rebuilt by
//! every mutation before it returns, so the three representations never
//! disagree on membership.

mod index;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::error_handling::StoreError;
use crate::models::{Record, ID_FIELD};

pub use index::SearchIndex;

/// How the store treats records that share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Refuse to build a store containing duplicate identifiers.
    Reject,
    /// Keep every record; the keyed index resolves to the last one.
    #[default]
    LastWriteWins,
}

/// Assigns identifiers to raw JSON entries.
///
/// Entries without an `id` receive their 1-based position. Existing identifiers
/// are kept as long as they are positive integers.
///
/// # Errors
///
/// Returns `StoreError::NotAnObject` for non-object entries and
/// `StoreError::InvalidIdentifier` for an `id` that is not a positive integer.
pub fn assign_identifiers(raw: Vec<Value>) -> Result<Vec<Record>, StoreError> {
    raw.into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let Value::Object(fields) = entry else {
                return Err(StoreError::NotAnObject);
            };
            let id = match fields.get(ID_FIELD) {
                None => position as u64 + 1,
                Some(value) => value
                    .as_u64()
                    .filter(|&id| id > 0)
                    .ok_or_else(|| StoreError::InvalidIdentifier(value.to_string()))?,
            };
            Ok(Record::new(id, fields))
        })
        .collect()
}

/// Canonical ordered collection of transactions plus derived indices.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: SearchIndex,
    policy: DuplicatePolicy,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            index: SearchIndex::default(),
            policy,
        }
    }

    /// Builds a store from records that already carry identifiers.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateIdentifier` when `policy` is
    /// [`DuplicatePolicy::Reject`] and two records share an identifier.
    pub fn from_records(records: Vec<Record>, policy: DuplicatePolicy) -> Result<Self, StoreError> {
        let index = SearchIndex::build(&records);
        if let Some(&id) = index.duplicates().iter().next() {
            match policy {
                DuplicatePolicy::Reject => return Err(StoreError::DuplicateIdentifier(id)),
                DuplicatePolicy::LastWriteWins => warn!(
                    "Duplicate transaction identifiers {:?}; keyed lookups resolve to the last occurrence",
                    index.duplicates()
                ),
            }
        }
        Ok(Self {
            records,
            index,
            policy,
        })
    }

    /// Builds a store from raw JSON entries, assigning missing identifiers.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`assign_identifiers`] and [`RecordStore::from_records`].
    pub fn from_json(raw: Vec<Value>, policy: DuplicatePolicy) -> Result<Self, StoreError> {
        Self::from_records(assign_identifiers(raw)?, policy)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Derived keyed index and sorted sequence.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Duplicate handling policy this store was built with.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keyed lookup of a record.
    pub fn get(&self, id: u64) -> Option<&Record> {
        self.index
            .position_of(id)
            .map(|position| &self.records[position])
    }

    /// Identifier the next inserted record receives.
    pub fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Appends a record under a freshly assigned identifier.
    pub fn insert(&mut self, fields: Map<String, Value>) -> &Record {
        let id = self.next_id();
        self.records.push(Record::new(id, fields));
        self.rebuild();
        debug!("Inserted transaction {}", id);
        let position = self.records.len() - 1;
        &self.records[position]
    }

    /// Replaces the fields of an existing record, keeping its identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has this identifier.
    pub fn update(&mut self, id: u64, fields: Map<String, Value>) -> Result<&Record, StoreError> {
        let position = self.index.position_of(id).ok_or(StoreError::NotFound(id))?;
        self.records[position] = Record::new(id, fields);
        self.rebuild();
        debug!("Updated transaction {}", id);
        Ok(&self.records[position])
    }

    /// Removes every record with this identifier.
    ///
    /// Returns the record the keyed index resolved the identifier to.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has this identifier.
    pub fn remove(&mut self, id: u64) -> Result<Record, StoreError> {
        let position = self.index.position_of(id).ok_or(StoreError::NotFound(id))?;
        let removed = self.records.remove(position);
        self.records.retain(|record| record.id != id);
        self.rebuild();
        debug!("Removed transaction {}", id);
        Ok(removed)
    }

    fn rebuild(&mut self) {
        self.index = SearchIndex::build(&self.records);
    }
}
