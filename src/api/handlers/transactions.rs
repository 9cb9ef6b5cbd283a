//! Transaction CRUD handlers.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

use super::super::error::ApiErrorResponse;
use super::super::types::{
    AppState, CreatedResponse, DeletedResponse, ListResponse, SearchComparison,
    SearchPerformanceNote, TransactionResponse, UpdatedResponse,
};
use crate::compare::Comparator;
use crate::config::{LIST_LIMIT, REQUIRED_CREATE_FIELDS};
use crate::error_handling::StoreError;
use crate::search::Strategy;

/// Parses the `{id}` path segment; zero and non-numeric values are rejected.
pub(super) fn parse_id(raw: &str, usage: &str) -> Result<u64, ApiErrorResponse> {
    raw.parse::<u64>()
        .ok()
        .filter(|&id| id > 0)
        .ok_or_else(|| ApiErrorResponse::bad_request(usage))
}

/// Parses a request body that must be a JSON object.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiErrorResponse> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(StoreError::NotAnObject.into()),
        Err(_) => Err(ApiErrorResponse::bad_request("Invalid JSON in request body")),
    }
}

fn now_millis() -> Value {
    json!(chrono::Utc::now().timestamp_millis())
}

/// `GET /transactions`
pub async fn list_transactions(State(state): State<AppState>) -> Json<ListResponse> {
    let store = state.store.read().await;
    Json(ListResponse {
        message: "All SMS transactions retrieved successfully".to_string(),
        count: store.len(),
        transactions: store.records().iter().take(LIST_LIMIT).cloned().collect(),
        search_performance: SearchPerformanceNote {
            note: "For individual lookups, dictionary lookup is O(1) vs linear search O(n)"
                .to_string(),
        },
    })
}

/// `GET /transactions/{id}`
///
/// The record is located by every strategy and cross-checked. An identifier
/// shared by several records (possible only when the dataset was loaded under
/// `DuplicatePolicy::LastWriteWins`) fails that check and yields 500 with an
/// "Inconsistent index" message: the dataset needs de-duplicating, the server
/// itself is healthy.
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<TransactionResponse>, ApiErrorResponse> {
    let id = parse_id(&raw_id, "Invalid endpoint. Use /transactions or /transactions/{id}")?;
    let store = state.store.read().await;
    let report = Comparator::new(&store).compare(id)?;

    let Some(transaction) = report.record().cloned() else {
        return Err(StoreError::NotFound(id).into());
    };
    let found = |strategy| report.result(strategy).is_some_and(|r| r.found);

    Ok(Json(TransactionResponse {
        message: format!("Transaction {} retrieved successfully", id),
        transaction,
        search_comparison: SearchComparison {
            linear_search_result: found(Strategy::LinearSearch),
            dictionary_lookup_result: found(Strategy::DictionaryLookup),
            binary_search_result: found(Strategy::BinarySearch),
            note: "Dictionary lookup is significantly faster for large datasets".to_string(),
        },
    }))
}

/// `POST /transactions`
pub async fn create_transaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiErrorResponse> {
    let mut fields = parse_object(&body)?;
    if let Some(missing) = REQUIRED_CREATE_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(StoreError::MissingField(missing.to_string()).into());
    }
    fields.insert("created_at".to_string(), now_millis());

    let mut store = state.store.write().await;
    let transaction = store.insert(fields).clone();
    log::info!("Created transaction {}", transaction.id);

    let response = CreatedResponse {
        message: "Transaction created successfully".to_string(),
        transaction,
        total_transactions: store.len(),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// `PUT /transactions/{id}`
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdatedResponse>, ApiErrorResponse> {
    let id = parse_id(&raw_id, "Invalid endpoint for PUT. Use /transactions/{id}")?;
    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        return Err(StoreError::NotFound(id).into());
    }

    let mut fields = parse_object(&body)?;
    fields.insert("updated_at".to_string(), now_millis());
    let transaction = store.update(id, fields)?.clone();
    log::info!("Updated transaction {}", id);

    Ok(Json(UpdatedResponse {
        message: format!("Transaction {} updated successfully", id),
        transaction,
    }))
}

/// `DELETE /transactions/{id}`
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiErrorResponse> {
    let id = parse_id(&raw_id, "Invalid endpoint for DELETE. Use /transactions/{id}")?;
    let mut store = state.store.write().await;
    let deleted_transaction = store.remove(id)?;
    log::info!("Deleted transaction {}", id);

    Ok(Json(DeletedResponse {
        message: format!("Transaction {} deleted successfully", id),
        deleted_transaction,
        remaining_transactions: store.len(),
    }))
}

/// Fallback for a known path requested with an unsupported method.
pub async fn unsupported_method(method: Method) -> ApiErrorResponse {
    let usage = match method {
        Method::POST => "Invalid endpoint for POST. Use /transactions",
        Method::PUT => "Invalid endpoint for PUT. Use /transactions/{id}",
        Method::DELETE => "Invalid endpoint for DELETE. Use /transactions/{id}",
        _ => "Invalid endpoint. Use /transactions or /transactions/{id}",
    };
    ApiErrorResponse::bad_request(usage)
}

/// Fallback for unknown paths.
pub async fn invalid_endpoint() -> ApiErrorResponse {
    ApiErrorResponse::bad_request("Invalid endpoint. Use /transactions or /transactions/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "usage").unwrap(), 12);
        assert!(parse_id("0", "usage").is_err());
        assert!(parse_id("-3", "usage").is_err());
        assert!(parse_id("abc", "usage").is_err());
    }

    #[test]
    fn test_parse_object() {
        assert!(parse_object(br#"{"address": "x"}"#).is_ok());
        assert_eq!(
            parse_object(b"[1]").unwrap_err().status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            parse_object(b"{oops").unwrap_err().message,
            "Invalid JSON in request body"
        );
    }
}
