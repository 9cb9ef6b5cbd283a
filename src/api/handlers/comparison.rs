//! Comparison and benchmark handlers.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

use super::super::error::ApiErrorResponse;
use super::super::types::{AppState, BenchmarkRequest};
use super::transactions::parse_id;
use crate::compare::{BenchmarkReport, Comparator, ComparisonReport};

/// `GET /transactions/{id}/comparison`
///
/// Returns the full report even when the identifier is absent; `found` is
/// false on every strategy in that case.
pub async fn compare_transaction(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ComparisonReport>, ApiErrorResponse> {
    let id = parse_id(&raw_id, "Invalid endpoint. Use /transactions/{id}/comparison")?;
    let store = state.store.read().await;
    let report = Comparator::new(&store).compare(id)?;
    Ok(Json(report))
}

/// `POST /benchmark` with `{"ids": [...]}`
pub async fn run_benchmark(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BenchmarkReport>, ApiErrorResponse> {
    let request: BenchmarkRequest = serde_json::from_slice(&body).map_err(|_| {
        ApiErrorResponse::bad_request("Request body must be {\"ids\": [positive integers]}")
    })?;

    let store = state.store.read().await;
    let report = Comparator::new(&store).benchmark(&request.ids)?;
    report.log_summary();
    Ok(Json(report))
}
