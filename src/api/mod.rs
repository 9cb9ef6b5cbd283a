//! HTTP API for SMS transactions.
//!
//! Provides:
//! - `GET /transactions` - list transactions (first 100)
//! - `GET /transactions/{id}` - fetch one transaction, cross-checked by every lookup strategy
//! - `GET /transactions/{id}/comparison` - full strategy comparison report
//! - `POST /transactions` - create a transaction
//! - `PUT /transactions/{id}` - replace a transaction's fields
//! - `DELETE /transactions/{id}` - delete a transaction
//! - `POST /benchmark` - compare strategies over a batch of identifiers
//!
//! Every route requires HTTP Basic authentication.

mod auth;
mod error;
mod handlers;
mod types;

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use handlers::{
    compare_transaction, create_transaction, delete_transaction, get_transaction,
    invalid_endpoint, list_transactions, run_benchmark, unsupported_method, update_transaction,
};

pub use auth::{decode_basic, CredentialVerifier, StaticCredentials};
pub use error::ApiErrorResponse;
pub use types::AppState;

use crate::store::RecordStore;

/// Builds the API router over `state`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
        .route("/transactions/{id}/comparison", get(compare_transaction))
        .route("/benchmark", post(run_benchmark))
        .fallback(invalid_endpoint)
        .method_not_allowed_fallback(unsupported_method)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        // outermost, so preflight requests are answered before authentication
        .layer(cors)
        .with_state(state)
}

/// Creates and starts the API server.
pub async fn start_api_server(
    bind: &str,
    port: u16,
    store: RecordStore,
    credentials: Arc<dyn CredentialVerifier>,
) -> Result<(), anyhow::Error> {
    let app = create_router(AppState::new(store, credentials));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", bind, port, e))?;

    log::info!("SMS Transactions API listening on http://{}:{}/", bind, port);
    log::info!("  GET    /transactions");
    log::info!("  GET    /transactions/{{id}}");
    log::info!("  GET    /transactions/{{id}}/comparison");
    log::info!("  POST   /transactions");
    log::info!("  PUT    /transactions/{{id}}");
    log::info!("  DELETE /transactions/{{id}}");
    log::info!("  POST   /benchmark");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use base64::Engine;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::sample_transactions;
    use crate::store::DuplicatePolicy;

    fn test_app() -> (Router, AppState) {
        let store =
            RecordStore::from_json(sample_transactions(), DuplicatePolicy::Reject).unwrap();
        let credentials = StaticCredentials::parse(&["admin:password123"]).unwrap();
        let state = AppState::new(store, Arc::new(credentials));
        (create_router(state.clone()), state)
    }

    fn basic(user: &str, password: &str) -> String {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{}:{}", user, password));
        format!("Basic {}", encoded)
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", basic("admin", "password123"));
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_missing_credentials_is_401() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/transactions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key("www-authenticate"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_401() {
        let (app, _) = test_app();
        let request = Request::builder()
            .uri("/transactions")
            .header("authorization", basic("admin", "nope"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status_code"], 401);
    }

    #[tokio::test]
    async fn test_list_transactions() {
        let (app, _) = test_app();
        let (status, body) = send(app, request("GET", "/transactions", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);
        assert_eq!(body["transactions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_transaction_found() {
        let (app, _) = test_app();
        let (status, body) = send(app, request("GET", "/transactions/2", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction"]["id"], 2);
        assert_eq!(body["search_comparison"]["linear_search_result"], true);
        assert_eq!(body["search_comparison"]["dictionary_lookup_result"], true);
        assert_eq!(body["search_comparison"]["binary_search_result"], true);
    }

    #[tokio::test]
    async fn test_get_transaction_missing_is_404() {
        let (app, _) = test_app();
        let (status, body) = send(app, request("GET", "/transactions/99", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Transaction with ID 99 not found");
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400() {
        let (app, _) = test_app();
        let (status, _) = send(app, request("GET", "/transactions/abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_path_is_400() {
        let (app, _) = test_app();
        let (status, body) = send(app, request("GET", "/messages", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[tokio::test]
    async fn test_get_duplicated_identifier_reports_inconsistent_index() {
        let store = RecordStore::from_json(
            vec![
                json!({"id": 4, "body": "first"}),
                json!({"id": 4, "body": "second"}),
            ],
            DuplicatePolicy::LastWriteWins,
        )
        .unwrap();
        let credentials = StaticCredentials::parse(&["admin:password123"]).unwrap();
        let app = create_router(AppState::new(store, Arc::new(credentials)));

        let (status, body) = send(app, request("GET", "/transactions/4", None)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Inconsistent index for transaction 4"));
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_is_400() {
        let (app, _) = test_app();
        let (status, body) = send(app.clone(), request("PUT", "/transactions", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid endpoint for PUT. Use /transactions/{id}");
        assert_eq!(body["status_code"], 400);

        let (status, body) = send(app, request("POST", "/transactions/1", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid endpoint for POST. Use /transactions");
    }

    #[tokio::test]
    async fn test_comparison_endpoint() {
        let (app, _) = test_app();
        let (status, body) =
            send(app, request("GET", "/transactions/3/comparison", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction_id"], 3);
        for strategy in ["linear_search", "dictionary_lookup", "binary_search"] {
            assert_eq!(body["algorithms"][strategy]["found"], true);
            assert_eq!(body["algorithms"][strategy]["result"]["id"], 3);
            assert!(body["algorithms"][strategy]["execution_time"].as_f64().unwrap() >= 0.0);
        }
        assert_eq!(body["performance_analysis"]["dataset_size"], 3);
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (app, state) = test_app();
        let new = json!({"address": "M-Money", "body": "Received 500 RWF", "date": "1715400000000"});
        let (status, body) = send(app.clone(), request("POST", "/transactions", Some(new))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["transaction"]["id"], 4);
        assert_eq!(body["total_transactions"], 4);
        assert!(body["transaction"]["created_at"].is_i64());

        let (status, body) = send(app, request("GET", "/transactions/4", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction"]["body"], "Received 500 RWF");

        let store = state.store.read().await;
        assert!(store.index().is_sorted(store.records()));
    }

    #[tokio::test]
    async fn test_create_missing_field_is_400() {
        let (app, _) = test_app();
        let new = json!({"address": "M-Money", "body": "no date"});
        let (status, body) = send(app, request("POST", "/transactions", Some(new))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required field: date");
    }

    #[tokio::test]
    async fn test_create_invalid_json_is_400() {
        let (app, _) = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/transactions")
            .header("authorization", basic("admin", "password123"))
            .body(Body::from("{broken"))
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid JSON in request body");
    }

    #[tokio::test]
    async fn test_update_transaction() {
        let (app, _) = test_app();
        let update = json!({"id": 500, "address": "Bank-Alert", "body": "updated", "date": "1"});
        let (status, body) =
            send(app.clone(), request("PUT", "/transactions/1", Some(update))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["transaction"]["id"], 1);
        assert!(body["transaction"]["updated_at"].is_i64());

        let (_, body) = send(app, request("GET", "/transactions/1/comparison", None)).await;
        assert_eq!(body["algorithms"]["binary_search"]["result"]["body"], "updated");
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let (app, _) = test_app();
        let (status, _) = send(
            app,
            request("PUT", "/transactions/42", Some(json!({"body": "x"}))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_transaction_keeps_strategies_in_sync() {
        let (app, _) = test_app();
        let (status, body) = send(app.clone(), request("DELETE", "/transactions/2", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted_transaction"]["id"], 2);
        assert_eq!(body["remaining_transactions"], 2);

        let (status, body) =
            send(app.clone(), request("GET", "/transactions/2/comparison", None)).await;
        assert_eq!(status, StatusCode::OK);
        for strategy in ["linear_search", "dictionary_lookup", "binary_search"] {
            assert_eq!(body["algorithms"][strategy]["found"], false);
        }

        let (status, _) = send(app, request("DELETE", "/transactions/2", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_benchmark_endpoint() {
        let (app, _) = test_app();
        let (status, body) = send(
            app,
            request("POST", "/benchmark", Some(json!({"ids": [1, 2, 3, 9]}))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["test_cases"], 4);
        assert_eq!(body["algorithms"]["dictionary_lookup"]["success_rate"], 75.0);
        assert_eq!(body["detailed_results"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_benchmark_empty_batch_is_400() {
        let (app, _) = test_app();
        let (status, body) =
            send(app, request("POST", "/benchmark", Some(json!({"ids": []})))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("at least one"));
    }

    #[tokio::test]
    async fn test_preflight_skips_auth() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/transactions")
                    .header("origin", "http://example.com")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
    }
}
