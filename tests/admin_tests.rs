// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access-control tests for the operator clear-users endpoint.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hubble_sso::config::Config;
use hubble_sso::store::MemoryStore;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

use common::{create_test_app, create_test_app_full, StubVerifier};

async fn clear_users(app: &Router, bearer: Option<&str>) -> axum::response::Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/admin/clear-users");

    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn login_ada(app: &Router) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/auth/google")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "credential": "cred-ada" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn clear_users_requires_bearer_token() {
    let (app, _) = create_test_app(StubVerifier::default().with_identity("cred-ada", "42", "Ada"));

    let response = clear_users(&app, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = clear_users(&app, Some("wrong_token")).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn clear_users_with_valid_token_removes_records() {
    let (app, _) = create_test_app(StubVerifier::default().with_identity("cred-ada", "42", "Ada"));

    login_ada(&app).await;

    // test_default() configures "test_admin_token".
    let response = clear_users(&app, Some("test_admin_token")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The session is gone; even phone updates now miss.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/user/update-phone")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "token": "token_42", "phoneNumber": "+15551234567" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_users_disabled_without_configured_token() {
    let config = Config {
        admin_token: None,
        ..Config::test_default()
    };
    let (app, _) = create_test_app_full(
        StubVerifier::default().with_identity("cred-ada", "42", "Ada"),
        Arc::new(MemoryStore::new()),
        config,
    );

    login_ada(&app).await;

    // Even a lucky guess cannot reach the handler when the feature is off.
    let response = clear_users(&app, Some("test_admin_token")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
