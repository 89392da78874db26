// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Operator-only maintenance routes.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin/clear-users", post(clear_users))
}

#[derive(Serialize)]
pub struct ClearUsersResponse {
    pub success: bool,
    pub message: String,
}

/// Destructively drop every user record.
///
/// Requires the configured admin bearer token; the route plays dead when no
/// token is configured so the deployment cannot be cleared by accident.
async fn clear_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if presented != Some(expected) {
        return Err(AppError::Forbidden);
    }

    state.sessions.clear_all().await?;

    tracing::warn!("All user records cleared by operator");

    Ok(Json(ClearUsersResponse {
        success: true,
        message: "All user records cleared.".to_string(),
    })
    .into_response())
}
