// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod session;
pub mod verifier;

pub use session::{IdentityPayload, SessionResult, SessionService};
pub use verifier::{CredentialVerifier, GoogleVerifier, VerifiedIdentity, VerifyError};
