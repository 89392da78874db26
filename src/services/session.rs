// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle: token derivation, create-or-update on login, profile
//! completion, and the SSO handshake read.
//!
//! A record moves through exactly three states: nonexistent, created with no
//! phone number, and complete. Re-entrant logins only refresh metadata.

use crate::error::AppError;
use crate::models::UserRecord;
use crate::services::verifier::VerifiedIdentity;
use crate::store::UserStore;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Prefix namespacing derived session tokens.
const TOKEN_PREFIX: &str = "token_";

/// Outcome of a successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub token: String,
    /// True until the phone number has been supplied
    pub profile_incomplete: bool,
    pub user: BasicProfile,
}

/// Non-sensitive profile subset returned to the login client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicProfile {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// Minimal verified identity released to the relying application.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityPayload {
    pub id: String,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

/// Derive the session token for an external identity.
///
/// Deliberately deterministic and non-secret so repeated logins map to the
/// same record. Wire-compatible with the original service's tokens.
pub fn derive_token(external_id: &str) -> String {
    format!("{TOKEN_PREFIX}{external_id}")
}

/// Core session service over the injected user store.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn UserStore>,
    /// Per-token locks serializing read-modify-write cycles so concurrent
    /// logins and phone updates for the same identity cannot lose writes.
    update_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            update_locks: Arc::new(DashMap::new()),
        }
    }

    fn lock_for(&self, token: &str) -> Arc<Mutex<()>> {
        self.update_locks
            .entry(token.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Create or update the user record for a verified identity.
    ///
    /// First login creates the record with no phone number; later logins
    /// refresh the claim fields and `last_login_at` but never touch the
    /// phone number.
    pub async fn issue_session(
        &self,
        identity: &VerifiedIdentity,
    ) -> Result<SessionResult, AppError> {
        let token = derive_token(&identity.external_id);
        let lock = self.lock_for(&token);
        let _guard = lock.lock().await;

        let now = chrono::Utc::now().to_rfc3339();

        let record = match self.store.get(&token).await? {
            Some(mut existing) => {
                existing.display_name = identity.display_name.clone();
                existing.email = identity.email.clone();
                existing.picture_url = identity.picture_url.clone();
                existing.last_login_at = now;
                existing
            }
            None => {
                tracing::info!(external_id = %identity.external_id, "Creating user record");
                UserRecord {
                    external_id: identity.external_id.clone(),
                    session_token: token.clone(),
                    display_name: identity.display_name.clone(),
                    email: identity.email.clone(),
                    picture_url: identity.picture_url.clone(),
                    phone_number: None,
                    created_at: now.clone(),
                    last_login_at: now,
                }
            }
        };

        self.store.put(&record).await?;

        Ok(SessionResult {
            token,
            profile_incomplete: !record.profile_complete(),
            user: BasicProfile {
                display_name: record.display_name,
                email: record.email,
                picture_url: record.picture_url,
            },
        })
    }

    /// Set the phone number for an existing session.
    ///
    /// Overwrites any previous value; an unknown token is an error and must
    /// never create a record.
    pub async fn complete_phone(
        &self,
        session_token: &str,
        phone_number: &str,
    ) -> Result<(), AppError> {
        let lock = self.lock_for(session_token);
        let guard = lock.lock().await;

        match self.store.get(session_token).await {
            Ok(Some(mut record)) => {
                record.phone_number = Some(phone_number.to_string());
                self.store.put(&record).await
            }
            miss => {
                // This endpoint is unauthenticated, so arbitrary tokens reach
                // the lock map. A miss must not pin an entry forever; remove
                // it once no other task holds the lock.
                drop(guard);
                drop(lock);
                self.update_locks
                    .remove_if(session_token, |_, lock| Arc::strong_count(lock) == 1);
                miss.and(Err(AppError::SessionNotFound))
            }
        }
    }

    /// Release the verified identity to the relying application.
    ///
    /// Succeeds only for an existing record with a phone number. Unknown
    /// token and incomplete profile collapse into the same error so session
    /// existence is not leaked.
    pub async fn handshake(&self, session_token: &str) -> Result<IdentityPayload, AppError> {
        match self.store.get(session_token).await? {
            Some(record) => match record.phone_number {
                Some(phone_number) => Ok(IdentityPayload {
                    id: record.external_id,
                    name: record.display_name,
                    phone_number,
                }),
                None => Err(AppError::ProfileUnavailable),
            },
            None => Err(AppError::ProfileUnavailable),
        }
    }

    /// Drop every user record. Operator-only maintenance hook.
    pub async fn clear_all(&self) -> Result<(), AppError> {
        self.store.clear().await?;
        self.update_locks.clear();
        Ok(())
    }
}
