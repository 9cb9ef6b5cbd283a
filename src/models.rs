//! Transaction record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON key holding a record's identifier.
pub const ID_FIELD: &str = "id";

/// One SMS transaction.
///
/// Apart from the identifier the record is schema-free; every other field is
/// kept verbatim and serialized alongside `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique positive identifier
    pub id: u64,
    /// Remaining fields (address, body, date, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record, discarding any `id` entry in `fields`.
    pub fn new(id: u64, mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    /// Returns a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
