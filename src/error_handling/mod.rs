//! Error handling.
//!
//! Error types are split by the layer that raises them:
//! - **SearchError**: rejected queries and index inconsistencies found by the comparator
//! - **StoreError**: identifier and schema problems found while building or mutating the store
//! - **LoadError**: dataset file problems (recovered from by the loader)
//! - **InitializationError**: application setup failures

mod types;

// Re-export public API
pub use types::{InitializationError, LoadError, SearchError, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::NotFound(42).to_string(),
            "Transaction with ID 42 not found"
        );
        assert_eq!(
            StoreError::MissingField("body".to_string()).to_string(),
            "Missing required field: body"
        );
        assert_eq!(
            StoreError::DuplicateIdentifier(7).to_string(),
            "Duplicate transaction identifier: 7"
        );
    }

    #[test]
    fn test_inconsistent_index_message_names_identifier() {
        let err = SearchError::InconsistentIndex {
            id: 3,
            detail: "keyed index resolved a different record".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("transaction 3"));
        assert!(msg.contains("keyed index"));
    }

    #[test]
    fn test_load_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = LoadError::from(json_err);
        assert!(err.to_string().starts_with("Invalid JSON in dataset"));
    }
}
