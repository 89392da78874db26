// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user store for tests and local development.

use crate::error::AppError;
use crate::models::UserRecord;
use crate::store::UserStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// HashMap-backed store with no persistence.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get(&self, session_token: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.records.read().await.get(session_token).cloned())
    }

    async fn put(&self, record: &UserRecord) -> Result<(), AppError> {
        self.records
            .write()
            .await
            .insert(record.session_token.clone(), record.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.records.write().await.clear();
        Ok(())
    }
}
