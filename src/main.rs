// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hubble-SSO API Server
//!
//! Verifies Google Sign-In credentials, maintains user records keyed by
//! session token, and serves the SSO handshake for the Hubble relying
//! application.

use hubble_sso::{
    config::Config,
    services::{GoogleVerifier, SessionService},
    store::JsonFileStore,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Hubble-SSO API");

    // Open the user store
    let store = JsonFileStore::open(&config.users_file)
        .await
        .expect("Failed to open user store");

    let verifier = Arc::new(
        GoogleVerifier::new(&config.google_client_id)
            .expect("Failed to initialize Google verifier"),
    );

    let sessions = SessionService::new(Arc::new(store));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        verifier,
        sessions,
    });

    // Build router
    let app = hubble_sso::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hubble_sso=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
