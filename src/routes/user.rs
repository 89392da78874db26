// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile completion route.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/user/update-phone", post(update_phone))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhoneRequest {
    token: String,
    phone_number: String,
}

#[derive(Serialize)]
pub struct UpdatePhoneResponse {
    pub success: bool,
}

/// Store the phone number for an existing session.
///
/// Format validation beyond non-emptiness is left to the frontend; the
/// state machine does not care about the shape of the value.
async fn update_phone(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdatePhoneRequest>,
) -> Result<Json<UpdatePhoneResponse>> {
    if body.phone_number.trim().is_empty() {
        return Err(AppError::BadRequest("phoneNumber must not be empty".to_string()));
    }

    state
        .sessions
        .complete_phone(&body.token, &body.phone_number)
        .await?;

    Ok(Json(UpdatePhoneResponse { success: true }))
}
