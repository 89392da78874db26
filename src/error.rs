// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Credential verification failed")]
    VerificationFailed,

    #[error("No session for token")]
    SessionNotFound,

    /// Covers both "unknown token" and "profile incomplete" for the SSO
    /// handshake. The relying application must not be able to tell the
    /// two apart, so both collapse into one generic not-found response.
    #[error("Profile unavailable")]
    ProfileUnavailable,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body matching the wire contract
/// (`success: false` plus an optional error string).
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::VerificationFailed => {
                (StatusCode::UNAUTHORIZED, Some("authentication_failed"))
            }
            AppError::SessionNotFound => (StatusCode::NOT_FOUND, Some("session_not_found")),
            AppError::ProfileUnavailable => (StatusCode::NOT_FOUND, None),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, Some("bad_request")),
            AppError::Forbidden => (StatusCode::FORBIDDEN, Some("forbidden")),
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some("storage_error"))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Some("internal_error"))
            }
        };

        let body = ErrorResponse {
            success: false,
            error: error.map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sso_failure_body_has_no_detail() {
        let response = AppError::ProfileUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false }));
    }

    #[tokio::test]
    async fn verification_failure_is_generic_401() {
        let response = AppError::VerificationFailed.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        // No provider-internal detail may leak to the caller.
        assert_eq!(body["error"], "authentication_failed");
    }
}
