// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Hubble-SSO: Google sign-in sessions with an SSO handshake for Hubble
//!
//! This crate provides the backend API that verifies Google ID tokens,
//! maintains user records keyed by session token, and releases verified
//! identity attributes to the Hubble relying application.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use services::{CredentialVerifier, SessionService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub sessions: SessionService,
}
