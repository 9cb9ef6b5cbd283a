//! JSON dataset loader and sample data.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::{json, Value};

use crate::error_handling::LoadError;

/// Reads a JSON array of transaction objects.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Json` if
/// it is not a JSON array.
pub fn read_transactions(path: &Path) -> Result<Vec<Value>, LoadError> {
    let contents = fs::read_to_string(path)?;
    let transactions: Vec<Value> = serde_json::from_str(&contents)?;
    Ok(transactions)
}

/// Loads transactions, falling back to an empty list on any error.
pub fn load_transactions(path: &Path) -> Vec<Value> {
    match read_transactions(path) {
        Ok(transactions) => {
            info!(
                "Loaded {} transactions from {}",
                transactions.len(),
                path.display()
            );
            transactions
        }
        Err(LoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("{} not found. Starting with empty dataset.", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!("{} ({}). Starting with empty dataset.", e, path.display());
            Vec::new()
        }
    }
}

/// Three-transaction sample used when no dataset is available.
pub fn sample_transactions() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "address": "M-Money",
            "body": "You have received 2000 RWF from Jane Smith",
            "date": "1715351458724",
            "type": "1",
            "service_center": "+250788110381"
        }),
        json!({
            "id": 2,
            "address": "M-Money",
            "body": "Your payment of 1,000 RWF has been completed",
            "date": "1715351506754",
            "type": "1",
            "service_center": "+250788110381"
        }),
        json!({
            "id": 3,
            "address": "Bank-Alert",
            "body": "Account balance: 50,000 RWF",
            "date": "1715369560245",
            "type": "1",
            "service_center": "+250788110381"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"address": "M-Money", "body": "hi", "date": "1"}}, {{"address": "x"}}]"#
        )
        .unwrap();

        let transactions = load_transactions(file.path());
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0]["address"], "M-Money");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let transactions = load_transactions(&dir.path().join("absent.json"));
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(load_transactions(file.path()).is_empty());
    }

    #[test]
    fn test_read_reports_error_kind() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();
        assert!(matches!(
            read_transactions(file.path()),
            Err(LoadError::Json(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_transactions(&dir.path().join("absent.json")),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn test_sample_transactions_have_unique_ids() {
        let sample = sample_transactions();
        let ids: Vec<u64> = sample.iter().filter_map(|t| t["id"].as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
