// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{body::Body, http::Request, http::StatusCode};
use run_club_api::config::Config;
use run_club_api::routes::create_router;
use run_club_api::services::{LogoChallengeService, RosterService};
use run_club_api::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app with the bundled roster.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        roster: RosterService::builtin().expect("bundled roster loads"),
        logo_challenge: LogoChallengeService::builtin().expect("bundled logo data loads"),
    });

    (create_router(state.clone()), state)
}

/// Issue a GET and return the status with the parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
