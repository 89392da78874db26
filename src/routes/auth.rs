// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google Sign-In authentication route.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::services::session::BasicProfile;
use crate::services::VerifyError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/google", post(auth_google))
}

/// Login request carrying the ID token from Google Sign-In.
#[derive(Deserialize)]
pub struct AuthRequest {
    credential: String,
}

/// Successful login response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub profile_incomplete: bool,
    pub user: BasicProfile,
}

/// Verify the Google credential and create or update the session.
async fn auth_google(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AuthRequest>,
) -> Result<Json<AuthResponse>> {
    let identity = state.verifier.verify(&body.credential).await.map_err(|e| {
        match e {
            VerifyError::Invalid(reason) => {
                // Provider detail stays in the logs; the caller gets a
                // generic authentication failure.
                tracing::warn!(reason = %reason, "Credential verification failed");
                AppError::VerificationFailed
            }
            VerifyError::Transient(reason) => {
                AppError::Internal(anyhow::anyhow!("verifier unavailable: {reason}"))
            }
        }
    })?;

    let result = state.sessions.issue_session(&identity).await?;

    tracing::info!(
        external_id = %identity.external_id,
        profile_incomplete = result.profile_incomplete,
        "Login successful"
    );

    Ok(Json(AuthResponse {
        success: true,
        token: result.token,
        profile_incomplete: result.profile_incomplete,
        user: result.user,
    }))
}
