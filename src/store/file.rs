// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat-file JSON user store.
//!
//! The whole token → record map is serialized on every write, matching the
//! original `users.json` layout. Writes go to a temp file first and are
//! renamed into place so a crash mid-write cannot leave a half-written store.

use crate::error::AppError;
use crate::models::UserRecord;
use crate::store::UserStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// JSON-file-backed store. The in-memory map is authoritative; the file is
/// rewritten under the write lock, so writers are serialized.
pub struct JsonFileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, UserRecord>>,
}

impl JsonFileStore {
    /// Open the store, loading any existing file. A missing or empty file
    /// starts an empty map.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Storage(format!("corrupt user store {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::info!(path = %path.display(), "User store opened");

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Serialize the given map and atomically replace the store file.
    async fn persist(&self, records: &HashMap<String, UserRecord>) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| AppError::Storage(format!("serialize user store: {}", e)))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| AppError::Storage(format!("write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("rename {}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn get(&self, session_token: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.records.read().await.get(session_token).cloned())
    }

    async fn put(&self, record: &UserRecord) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.insert(record.session_token.clone(), record.clone());
        self.persist(&records).await
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.clear();
        self.persist(&records).await
    }
}
