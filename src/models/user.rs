//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in the user store, keyed by session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Google subject identifier (stable across logins; immutable)
    pub external_id: String,
    /// Session token derived from `external_id` (also the storage key)
    pub session_token: String,
    /// Display name from provider claims; refreshed on re-login
    pub display_name: String,
    /// Email address (may be None if not shared)
    pub email: Option<String>,
    /// Profile picture URL
    pub picture_url: Option<String>,
    /// Phone number; None until profile completion, never cleared by login
    pub phone_number: Option<String>,
    /// When the record was first created (RFC 3339)
    pub created_at: String,
    /// Last successful login (RFC 3339)
    pub last_login_at: String,
}

impl UserRecord {
    /// A profile is complete once the phone number has been supplied.
    /// This is the gate for the SSO handshake.
    pub fn profile_complete(&self) -> bool {
        self.phone_number.is_some()
    }
}
