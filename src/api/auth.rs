//! HTTP Basic authentication.
//!
//! Credential checking is an injected [`CredentialVerifier`] so the router
//! never owns a credential table of its own.

use std::collections::HashMap;

use anyhow::{bail, Result};
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine;

use super::error::ApiErrorResponse;
use super::types::AppState;

/// Decides whether a username/password pair is accepted.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if the pair is valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Fixed in-memory credential table.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    /// Parses `user:password` entries.
    ///
    /// # Errors
    ///
    /// Fails on an entry without a `:` separator or with an empty username.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut users = HashMap::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            let Some((user, password)) = entry.split_once(':') else {
                bail!("Credential entry must be user:password, got {:?}", entry);
            };
            if user.is_empty() {
                bail!("Credential entry has an empty username");
            }
            users.insert(user.to_string(), password.to_string());
        }
        Ok(Self { users })
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

/// Extracts `(username, password)` from a `Basic` authorization header value.
pub fn decode_basic(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, password) = text.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Middleware rejecting requests without valid Basic credentials.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic)
        .is_some_and(|(user, password)| state.credentials.verify(&user, &password));

    if !authorized {
        log::debug!("Rejected unauthenticated request to {}", request.uri());
        return ApiErrorResponse::unauthorized().into_response();
    }
    next.run(request).await
}
