//! Application configuration loaded from environment variables.
//!
//! Everything security-relevant (expected audience, permitted origins,
//! admin token) comes from the server environment, never from request data.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google OAuth client ID; the expected `aud` of incoming ID tokens
    pub google_client_id: String,
    /// Origins permitted by CORS (exact matches)
    pub allowed_origins: Vec<String>,
    /// Path of the JSON user store
    pub users_file: String,
    /// Server port
    pub port: u16,
    /// Bearer token for operator-only endpoints; None disables them
    pub admin_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            google_client_id: env::var("GOOGLE_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("GOOGLE_CLIENT_ID"))?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().trim_end_matches('/').to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| vec!["http://localhost:3000".to_string()]),
            users_file: env::var("USERS_FILE").unwrap_or_else(|_| "users.json".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap_or(10000),
            admin_token: env::var("ADMIN_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            google_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            users_file: "users.json".to_string(),
            port: 10000,
            admin_token: Some("test_admin_token".to_string()),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
