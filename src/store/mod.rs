// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User record storage layer.
//!
//! The core logic only sees the [`UserStore`] trait; the flat-file JSON
//! backing can be swapped for any keyed persistence without touching it.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::UserRecord;
use async_trait::async_trait;

/// Keyed user-record store. The key is the session token.
///
/// Lookups by unknown token are a defined miss (`Ok(None)`), not an error.
/// `put` has whole-record replace semantics; no multi-key transactions.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the record for a session token, if any.
    async fn get(&self, session_token: &str) -> Result<Option<UserRecord>, AppError>;

    /// Create or replace the record under its own `session_token`.
    async fn put(&self, record: &UserRecord) -> Result<(), AppError>;

    /// Remove every record. Operator-only maintenance hook.
    async fn clear(&self) -> Result<(), AppError>;
}
