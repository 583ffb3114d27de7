// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session middleware: resolves which mock user this browser selected.

use crate::db::{keys, KeyValueStore};
use crate::models::User;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Name of the cookie carrying the session ID.
pub const SESSION_COOKIE: &str = "running_log_session";

/// The user selected in the current session.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: u64,
    /// Key-value store of the session that selected this user
    pub session: Arc<KeyValueStore>,
}

/// Session ID from the cookie, falling back to an `Authorization: Bearer` header.
pub fn session_id(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
}

/// The user selected by the session this request names, if any.
pub fn resolve_session(
    state: &AppState,
    jar: &CookieJar,
    headers: &HeaderMap,
) -> Option<CurrentUser> {
    let id = session_id(jar, headers)?;
    let session = state.sessions.get(&id)?;
    let user: User = session.get(keys::CURRENT_USER)?;
    Some(CurrentUser {
        user_id: user.id,
        session,
    })
}

/// Middleware that requires a session with a selected user.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let current =
        resolve_session(&state, &jar, request.headers()).ok_or(StatusCode::UNAUTHORIZED)?;
    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}
