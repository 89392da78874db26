// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use hubble_sso::config::Config;
use hubble_sso::routes::create_router;
use hubble_sso::services::{CredentialVerifier, SessionService, VerifiedIdentity, VerifyError};
use hubble_sso::store::{MemoryStore, UserStore};
use hubble_sso::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Stub verifier mapping known credential strings to identities.
/// Anything unregistered fails verification.
#[derive(Default)]
pub struct StubVerifier {
    identities: HashMap<String, VerifiedIdentity>,
}

impl StubVerifier {
    #[allow(dead_code)]
    pub fn with_identity(mut self, credential: &str, sub: &str, name: &str) -> Self {
        self.identities.insert(
            credential.to_string(),
            VerifiedIdentity {
                external_id: sub.to_string(),
                display_name: name.to_string(),
                email: Some(format!("{sub}@example.com")),
                picture_url: None,
            },
        );
        self
    }
}

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(&self, credential: &str) -> Result<VerifiedIdentity, VerifyError> {
        self.identities
            .get(credential)
            .cloned()
            .ok_or_else(|| VerifyError::Invalid("unknown test credential".to_string()))
    }
}

/// Create a test app with an in-memory store and the given stub verifier.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(verifier: StubVerifier) -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(verifier, Arc::new(MemoryStore::new()))
}

/// Create a test app over an explicit store (for persistence tests).
#[allow(dead_code)]
pub fn create_test_app_with_store(
    verifier: StubVerifier,
    store: Arc<dyn UserStore>,
) -> (axum::Router, Arc<AppState>) {
    create_test_app_full(verifier, store, Config::test_default())
}

/// Create a test app with full control over the configuration.
#[allow(dead_code)]
pub fn create_test_app_full(
    verifier: StubVerifier,
    store: Arc<dyn UserStore>,
    config: Config,
) -> (axum::Router, Arc<AppState>) {
    let sessions = SessionService::new(store);

    let state = Arc::new(AppState {
        config,
        verifier: Arc::new(verifier),
        sessions,
    });

    (create_router(state.clone()), state)
}
