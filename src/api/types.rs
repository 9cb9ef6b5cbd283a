//! API state and response bodies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::Record;
use crate::store::RecordStore;

use super::auth::CredentialVerifier;

/// Shared state for the API server.
///
/// The store and its derived indices sit behind one lock: handlers that read
/// take the read guard, handlers that mutate take the write guard.
#[derive(Clone)]
pub struct AppState {
    /// Transaction store shared by every handler
    pub store: Arc<RwLock<RecordStore>>,
    /// Accepted Basic credentials
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Wraps `store` for sharing across handlers.
    pub fn new(store: RecordStore, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            credentials,
        }
    }
}

/// JSON response for `GET /transactions`
#[derive(Serialize)]
pub struct ListResponse {
    pub message: String,
    pub count: usize,
    pub transactions: Vec<Record>,
    pub search_performance: SearchPerformanceNote,
}

#[derive(Serialize)]
pub struct SearchPerformanceNote {
    pub note: String,
}

/// JSON response for `GET /transactions/{id}`
#[derive(Serialize)]
pub struct TransactionResponse {
    pub message: String,
    pub transaction: Record,
    pub search_comparison: SearchComparison,
}

#[derive(Serialize)]
pub struct SearchComparison {
    pub linear_search_result: bool,
    pub dictionary_lookup_result: bool,
    pub binary_search_result: bool,
    pub note: String,
}

/// JSON response for `POST /transactions`
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub transaction: Record,
    pub total_transactions: usize,
}

/// JSON response for `PUT /transactions/{id}`
#[derive(Serialize)]
pub struct UpdatedResponse {
    pub message: String,
    pub transaction: Record,
}

/// JSON response for `DELETE /transactions/{id}`
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: String,
    pub deleted_transaction: Record,
    pub remaining_transactions: usize,
}

/// JSON request for `POST /benchmark`
#[derive(Debug, Deserialize)]
pub struct BenchmarkRequest {
    pub ids: Vec<u64>,
}
