// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard endpoint tests.

use axum::http::StatusCode;
use running_log::db::RunningLogDb;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_rankings_include_every_user() {
    let records = vec![
        common::record(4, 3, "2024-03-04", 20.0),
        common::record(3, 1, "2024-03-03", 8.0),
        common::record(2, 1, "2024-03-02", 4.0),
        // Owner not in the directory
        common::record(1, 77, "2024-03-01", 500.0),
    ];
    let (app, _) =
        common::create_test_app_with(RunningLogDb::new(common::test_users(), records));
    let cookie = common::login(&app, 1).await;

    let (status, body) = common::send(&app, "GET", "/api/rankings", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["runner_count"], 3);
    assert_eq!(body["current_user_rank"], 2);

    let rankings = body["rankings"].as_array().unwrap();
    let order: Vec<u64> = rankings
        .iter()
        .map(|r| r["user"]["id"].as_u64().unwrap())
        .collect();
    assert_eq!(order, vec![3, 1, 2]);

    assert_eq!(rankings[0]["rank"], 1);
    assert_eq!(rankings[0]["rank_label"], "🥇 #1");
    assert_eq!(rankings[0]["distance_label"], "20.0 km");
    assert_eq!(rankings[1]["total_distance"], 12.0);
    assert_eq!(rankings[1]["is_current_user"], true);
    assert_eq!(rankings[2]["total_distance"], 0.0);
    assert_eq!(rankings[2]["is_current_user"], false);
}

#[tokio::test]
async fn test_rankings_follow_new_records() {
    let (app, _) = common::create_test_app();
    let cookie = common::login(&app, 2).await;

    let (_, before) = common::send(&app, "GET", "/api/rankings", Some(&cookie), None).await;
    // All zero: ties keep directory order
    assert_eq!(before["rankings"][0]["user"]["id"], 1);
    assert_eq!(before["current_user_rank"], 2);

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/records",
        Some(&cookie),
        Some(json!({ "date": "2024-03-05", "distance": 3.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, after) = common::send(&app, "GET", "/api/rankings", Some(&cookie), None).await;
    assert_eq!(after["rankings"][0]["user"]["id"], 2);
    assert_eq!(after["current_user_rank"], 1);
}

#[tokio::test]
async fn test_rankings_empty_directory() {
    let (app, state) = common::create_test_app_with(RunningLogDb::default());

    // No users to pick, so seed a session by hand
    let (session_id, session) = state.sessions.create().unwrap();
    session
        .set(
            running_log::db::keys::CURRENT_USER,
            &running_log::models::User::new(9, "Ghost", "-"),
        )
        .unwrap();
    let cookie = format!("running_log_session={session_id}");

    let (status, body) = common::send(&app, "GET", "/api/rankings", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["runner_count"], 0);
    assert!(body["rankings"].as_array().unwrap().is_empty());
    assert!(body["current_user_rank"].is_null());
}
