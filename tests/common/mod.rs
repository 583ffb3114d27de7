// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use running_log::config::Config;
use running_log::db::RunningLogDb;
use running_log::models::{RunningRecord, User};
use running_log::routes::create_router;
use running_log::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Three runners: Alice (goal 50), Bob (no goal), Carol (goal 30).
#[allow(dead_code)]
pub fn test_users() -> Vec<User> {
    let goal_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    vec![
        User::new(1, "Alice", "138****1234").with_goal(50.0, goal_date),
        User::new(2, "Bob", "139****5678"),
        User::new(3, "Carol", "137****9012").with_goal(30.0, goal_date),
    ]
}

/// A record for `user_id`, dated `date` ("YYYY-MM-DD").
#[allow(dead_code)]
pub fn record(id: u64, user_id: u64, date: &str, distance: f64) -> RunningRecord {
    RunningRecord {
        id,
        user_id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        distance,
    }
}

/// Create a test app over the given store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with(db: RunningLogDb) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), db));
    (create_router(state.clone()), state)
}

/// Create a test app with the test users and no records.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(RunningLogDb::new(test_users(), Vec::new()))
}

/// Send a request and decode the JSON body (`Value::Null` when empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Select `user_id` and return the `name=value` session cookie.
#[allow(dead_code)]
pub async fn login(app: &Router, user_id: u64) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({ "user_id": user_id }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}
