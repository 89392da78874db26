// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Restart-survival tests for the JSON file store behind the full router.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hubble_sso::store::JsonFileStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::{create_test_app_with_store, StubVerifier};

fn verifier() -> StubVerifier {
    StubVerifier::default().with_identity("cred-ada", "42", "Ada")
}

async fn post_json(app: &Router, uri: &str, body: Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn completed_profile_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    // First process lifetime: login and complete the profile.
    {
        let store = Arc::new(JsonFileStore::open(&path).await.unwrap());
        let (app, _) = create_test_app_with_store(verifier(), store);

        let response =
            post_json(&app, "/api/auth/google", json!({ "credential": "cred-ada" })).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = post_json(
            &app,
            "/api/user/update-phone",
            json!({ "token": "token_42", "phoneNumber": "+15551234567" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Second process lifetime: the handshake works from the reloaded file.
    let store = Arc::new(JsonFileStore::open(&path).await.unwrap());
    let (app, _) = create_test_app_with_store(verifier(), store);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/hubble/sso/token_42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["user"]["phoneNumber"], "+15551234567");
}

#[tokio::test]
async fn relogin_after_restart_keeps_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");

    {
        let store = Arc::new(JsonFileStore::open(&path).await.unwrap());
        let (app, _) = create_test_app_with_store(verifier(), store);
        post_json(&app, "/api/auth/google", json!({ "credential": "cred-ada" })).await;
    }

    let store = Arc::new(JsonFileStore::open(&path).await.unwrap());
    let (app, _) = create_test_app_with_store(verifier(), store);

    let response = post_json(&app, "/api/auth/google", json!({ "credential": "cred-ada" })).await;
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["token"], "token_42");

    // The on-disk map still holds exactly one entry for this identity.
    let raw = tokio::fs::read(&path).await.unwrap();
    let map: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(map.as_object().unwrap().len(), 1);
    assert!(map.get("token_42").is_some());
}
