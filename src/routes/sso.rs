// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SSO handshake route for the Hubble relying application.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::services::IdentityPayload;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/hubble/sso/{token}", get(handshake))
}

#[derive(Serialize)]
pub struct HandshakeResponse {
    pub success: bool,
    pub user: IdentityPayload,
}

/// Exchange a session token for the verified identity attributes.
///
/// Pure read; only succeeds for a known token with a completed profile, and
/// the failure response never reveals which of the two conditions failed.
async fn handshake(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<HandshakeResponse>> {
    let user = state.sessions.handshake(&token).await?;

    Ok(Json(HandshakeResponse {
        success: true,
        user,
    }))
}
