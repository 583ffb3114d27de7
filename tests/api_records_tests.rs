// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Record CRUD through the API.

use axum::http::StatusCode;
use running_log::db::RunningLogDb;
use serde_json::json;

mod common;

fn seeded_app() -> (axum::Router, std::sync::Arc<running_log::AppState>) {
    let records = vec![
        common::record(3, 1, "2024-03-03", 8.0),
        common::record(2, 2, "2024-03-02", 4.5),
        common::record(1, 1, "2024-03-01", 2.0),
    ];
    common::create_test_app_with(RunningLogDb::new(common::test_users(), records))
}

#[tokio::test]
async fn test_list_records_only_for_current_user() {
    let (app, _) = seeded_app();
    let cookie = common::login(&app, 1).await;

    let (status, body) = common::send(&app, "GET", "/api/records", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(body["count"], 2);
    assert_eq!(body["total_distance"], 10.0);
    assert_eq!(body["total_label"], "10.0 km");
    assert_eq!(body["average_distance"], 5.0);
    assert_eq!(body["average_label"], "5.0 km");
}

#[tokio::test]
async fn test_list_records_empty_has_zero_average() {
    let (app, _) = seeded_app();
    let cookie = common::login(&app, 3).await;

    let (status, body) = common::send(&app, "GET", "/api/records", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["average_distance"], 0.0);
    assert_eq!(body["average_label"], "0.0 km");
    assert_eq!(body["total_label"], "0.0 km");
}

#[tokio::test]
async fn test_create_record() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 2).await;

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/records",
        Some(&cookie),
        Some(json!({ "date": "2024-03-05", "distance": 6.4 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);
    assert_eq!(created["user_id"], 2);
    assert_eq!(created["date"], "2024-03-05");
    assert_eq!(created["distance"], 6.4);

    let db = state.db.read().await;
    assert_eq!(db.len(), 4);
    assert_eq!(db.records()[0].id, 4);
}

#[tokio::test]
async fn test_create_record_rejects_invalid_form() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 1).await;

    for body in [
        json!({ "date": "2024-03-05", "distance": 0.0 }),
        json!({ "date": "2024-03-05", "distance": 101.0 }),
        json!({ "date": "March 5th", "distance": 5.0 }),
    ] {
        let (status, error) =
            common::send(&app, "POST", "/api/records", Some(&cookie), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "validation_failed");
    }

    assert_eq!(state.db.read().await.len(), 3);
}

#[tokio::test]
async fn test_update_record_distance_only() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 1).await;

    let (status, updated) = common::send(
        &app,
        "PUT",
        "/api/records/1",
        Some(&cookie),
        Some(json!({ "distance": 7.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["distance"], 7.5);
    assert_eq!(updated["date"], "2024-03-01");
    assert_eq!(updated["user_id"], 1);
    assert_eq!(state.db.read().await.get(1).unwrap().distance, 7.5);
}

#[tokio::test]
async fn test_update_other_users_record_is_not_found() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 1).await;

    let (status, _) = common::send(
        &app,
        "PUT",
        "/api/records/2",
        Some(&cookie),
        Some(json!({ "distance": 7.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.db.read().await.get(2).unwrap().distance, 4.5);
}

#[tokio::test]
async fn test_delete_record() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 1).await;

    let (status, _) = common::send(&app, "DELETE", "/api/records/3", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = common::send(&app, "DELETE", "/api/records/3", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let db = state.db.read().await;
    assert_eq!(db.len(), 2);
    assert!(db.get(3).is_none());
}

#[tokio::test]
async fn test_delete_unknown_record_leaves_store_unchanged() {
    let (app, state) = seeded_app();
    let cookie = common::login(&app, 1).await;
    let before = state.db.read().await.records().to_vec();

    let (status, _) =
        common::send(&app, "DELETE", "/api/records/999", Some(&cookie), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(state.db.read().await.records(), before.as_slice());
}
