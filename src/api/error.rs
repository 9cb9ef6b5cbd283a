//! API error envelope.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::AUTH_REALM;
use crate::error_handling::{SearchError, StoreError};

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Canonical reason phrase of the status
    pub error: String,
    pub message: String,
    pub status_code: u16,
    /// Unix time in seconds
    pub timestamp: f64,
}

/// An error status plus the message shown to the client.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Message shown to the client
    pub message: String,
}

impl ApiErrorResponse {
    /// Error with an arbitrary status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "Invalid credentials. Please provide valid Basic Auth credentials.",
        )
    }

    /// 500 Internal Server Error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.message,
            status_code: self.status.as_u16(),
            timestamp: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
        };
        let mut response = (self.status, Json(body)).into_response();
        if self.status == StatusCode::UNAUTHORIZED {
            if let Ok(value) = format!("Basic realm=\"{}\"", AUTH_REALM).parse() {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }
        response
    }
}

impl From<SearchError> for ApiErrorResponse {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::InvalidInput(_) => Self::bad_request(error.to_string()),
            SearchError::InconsistentIndex { .. } => {
                log::error!("{}", error);
                Self::internal_error(error.to_string())
            }
        }
    }
}

impl From<StoreError> for ApiErrorResponse {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => Self::not_found(error.to_string()),
            StoreError::MissingField(_)
            | StoreError::InvalidIdentifier(_)
            | StoreError::NotAnObject => Self::bad_request(error.to_string()),
            StoreError::DuplicateIdentifier(_) => {
                log::error!("{}", error);
                Self::internal_error(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_status() {
        assert_eq!(
            ApiErrorResponse::from(StoreError::NotFound(3)).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiErrorResponse::from(StoreError::MissingField("date".into())).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiErrorResponse::from(StoreError::DuplicateIdentifier(3)).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_search_errors_map_to_status() {
        assert_eq!(
            ApiErrorResponse::from(SearchError::InvalidInput("empty".into())).status,
            StatusCode::BAD_REQUEST
        );
        let inconsistent = SearchError::InconsistentIndex {
            id: 1,
            detail: "mismatch".into(),
        };
        assert_eq!(
            ApiErrorResponse::from(inconsistent).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = ApiErrorResponse::unauthorized().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"SMS API\""
        );
    }
}
