// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mock login: pick one of the demo runners for this browser session.

use crate::db::keys;
use crate::error::{AppError, Result};
use crate::middleware::session::{resolve_session, session_id, SESSION_COOKIE};
use crate::models::User;
use crate::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;

/// Session routes (no session required).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users))
        .route(
            "/api/session",
            get(current_session).post(login).delete(logout),
        )
}

/// Runners available on the login screen.
async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let db = state.db.read().await;
    Json(db.users().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_id: u64,
}

fn session_cookie(id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Select a runner and remember the choice in this browser's session.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<User>)> {
    let user = state
        .db
        .read()
        .await
        .user(body.user_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", body.user_id)))?;

    let existing = session_id(&jar, &headers);
    let (id, session) = state.sessions.get_or_create(existing.as_deref())?;
    session.set(keys::CURRENT_USER, &user)?;

    tracing::info!(user_id = user.id, "User selected");

    let jar = jar.add(session_cookie(id, state.config.secure_cookies));
    Ok((jar, Json(user)))
}

/// The runner selected in this session, as currently stored.
async fn current_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<Json<User>> {
    let current = resolve_session(&state, &jar, &headers).ok_or(AppError::Unauthorized)?;
    let db = state.db.read().await;
    let user = db
        .user(current.user_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", current.user_id)))?;
    Ok(Json(user))
}

/// Forget the selected runner and drop the session.
async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> (CookieJar, StatusCode) {
    if let Some(id) = session_id(&jar, &headers) {
        if let Some(session) = state.sessions.get(&id) {
            session.remove(keys::CURRENT_USER);
        }
        if state.sessions.remove(&id) {
            tracing::info!(sessions = state.sessions.len(), "User logged out");
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}
