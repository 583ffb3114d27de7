// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the selected user.

use crate::db::keys;
use crate::error::{AppError, Result};
use crate::format_utils::{format_distance, format_total_distance, rank_label};
use crate::forms::{GoalForm, RecordForm, RecordUpdateForm};
use crate::middleware::CurrentUser;
use crate::models::{GoalSetting, RunningRecord, User};
use crate::services::aggregation;
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require a selected user).
/// The session middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/records", get(list_records).post(create_record))
        .route(
            "/api/records/{id}",
            put(update_record).delete(delete_record),
        )
        .route("/api/rankings", get(get_rankings))
        .route("/api/goal", get(get_goal).put(set_goal))
}

// ─── Records ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordsResponse {
    /// Most recent first
    pub records: Vec<RunningRecord>,
    pub count: usize,
    pub total_distance: f64,
    pub total_label: String,
    /// Mean distance per run, 0 when there are no runs
    pub average_distance: f64,
    pub average_label: String,
}

/// List the selected user's runs.
async fn list_records(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<RecordsResponse> {
    let db = state.db.read().await;
    let records = db.list_by_user(user.user_id);
    let total_distance = aggregation::total_distance(&records, user.user_id);
    let average_distance = aggregation::average_distance(&records);

    tracing::debug!(
        user_id = user.user_id,
        count = records.len(),
        "Fetching records"
    );

    Json(RecordsResponse {
        count: records.len(),
        records,
        total_distance,
        total_label: format_distance(total_distance),
        average_distance,
        average_label: format_distance(average_distance),
    })
}

/// Log a new run for the selected user.
async fn create_record(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(form): Json<RecordForm>,
) -> Result<(StatusCode, Json<RunningRecord>)> {
    let new_record = form.into_new_record(user.user_id)?;
    let record = state.db.write().await.add(new_record);

    tracing::info!(
        user_id = user.user_id,
        record_id = record.id,
        distance = record.distance,
        "Run logged"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

fn not_found(record_id: u64) -> AppError {
    AppError::NotFound(format!("Record {record_id} not found"))
}

/// Edit one of the selected user's runs.
async fn update_record(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(record_id): Path<u64>,
    Json(form): Json<RecordUpdateForm>,
) -> Result<Json<RunningRecord>> {
    let update = form.into_update()?;
    let mut db = state.db.write().await;

    // Other users' records are reported as missing.
    if db.get(record_id).map(|r| r.user_id) != Some(user.user_id) {
        return Err(not_found(record_id));
    }
    let record = db.update(record_id, &update).ok_or_else(|| not_found(record_id))?;

    tracing::info!(user_id = user.user_id, record_id, "Run updated");
    Ok(Json(record))
}

/// Delete one of the selected user's runs.
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(record_id): Path<u64>,
) -> Result<StatusCode> {
    let mut db = state.db.write().await;

    if db.get(record_id).map(|r| r.user_id) != Some(user.user_id) || !db.delete(record_id) {
        return Err(not_found(record_id));
    }

    tracing::info!(user_id = user.user_id, record_id, "Run deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ─── Rankings ────────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankingEntry {
    pub rank: u32,
    pub rank_label: String,
    pub user: User,
    pub total_distance: f64,
    pub distance_label: String,
    pub is_current_user: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankingsResponse {
    pub rankings: Vec<RankingEntry>,
    pub runner_count: usize,
    /// Position of the selected user, if they are on the board
    pub current_user_rank: Option<u32>,
}

/// Leaderboard of all runners by total distance.
async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<RankingsResponse> {
    let ranked = {
        let db = state.db.read().await;
        aggregation::rankings(db.users(), db.records())
    };

    let current_user_rank = ranked
        .iter()
        .find(|item| item.user.id == user.user_id)
        .map(|item| item.rank);

    let rankings: Vec<RankingEntry> = ranked
        .into_iter()
        .map(|item| RankingEntry {
            rank: item.rank,
            rank_label: rank_label(item.rank),
            is_current_user: item.user.id == user.user_id,
            user: item.user,
            total_distance: item.total_distance,
            distance_label: format_total_distance(item.total_distance),
        })
        .collect();

    Json(RankingsResponse {
        runner_count: rankings.len(),
        rankings,
        current_user_rank,
    })
}

// ─── Monthly Goal ────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalSummary {
    #[serde(flatten)]
    pub setting: GoalSetting,
    pub progress_percent: f64,
    pub remaining: f64,
    /// Kilometers per day still needed to reach the goal
    pub daily_pace: f64,
    pub daily_pace_label: String,
    pub progress_label: String,
    pub goal_label: String,
}

impl From<GoalSetting> for GoalSummary {
    fn from(setting: GoalSetting) -> Self {
        Self {
            progress_percent: setting.progress_percent(),
            remaining: setting.remaining(),
            daily_pace: setting.daily_pace(),
            daily_pace_label: format_distance(setting.daily_pace()),
            progress_label: format_distance(setting.current_month_progress),
            goal_label: format_distance(setting.monthly_goal),
            setting,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalResponse {
    /// `null` when no monthly goal has been set
    pub goal: Option<GoalSummary>,
}

/// Current-month progress toward the selected user's goal.
async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<GoalResponse>> {
    let db = state.db.read().await;
    let profile = db
        .user(user.user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    let goal = aggregation::goal_progress(profile, db.records(), today_utc());
    Ok(Json(GoalResponse {
        goal: goal.map(GoalSummary::from),
    }))
}

/// Set the selected user's monthly goal.
async fn set_goal(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(form): Json<GoalForm>,
) -> Result<Json<GoalResponse>> {
    let monthly_goal = form.into_goal()?;
    let today = today_utc();

    let (profile, goal) = {
        let mut db = state.db.write().await;
        let profile = db
            .set_user_goal(user.user_id, monthly_goal, today)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;
        let goal = aggregation::goal_progress(&profile, db.records(), today);
        (profile, goal)
    };

    // Keep the session's copy of the user in step with the store.
    user.session.set(keys::CURRENT_USER, &profile)?;

    tracing::info!(user_id = user.user_id, monthly_goal, "Monthly goal updated");
    Ok(Json(GoalResponse {
        goal: goal.map(GoalSummary::from),
    }))
}
