// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod api;
pub mod session;

use crate::middleware::session::require_session;
use crate::AppState;
use axum::extract::State;
use axum::http::{header, request::Parts, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Hosts accepted as dev frontends on any port.
const DEV_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub records: usize,
    pub sessions: usize,
}

/// Liveness plus the size of the in-memory state.
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db = state.db.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        users: db.users().len(),
        records: db.len(),
        sessions: state.sessions.len(),
    })
}

/// Whether a browser at `origin` may call the API with credentials.
///
/// Accepts the configured frontend exactly, or plain-HTTP localhost on any port.
pub fn origin_allowed(frontend_url: &str, origin: &str) -> bool {
    if origin == frontend_url.trim_end_matches('/') {
        return true;
    }
    let Some(authority) = origin.strip_prefix("http://") else {
        return false;
    };
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => host,
        Some(_) => return false,
        None => authority,
    };
    DEV_HOSTS.contains(&host)
}

fn cors_layer(frontend_url: String) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
            origin
                .to_str()
                .is_ok_and(|origin| origin_allowed(&frontend_url, origin))
        }))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Login screen and session management work without a selected user
    let open = Router::new()
        .route("/health", get(health_check))
        .merge(session::routes());

    let selected_user =
        api::routes().route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .merge(open)
        .merge(selected_user)
        .layer(cors_layer(state.config.frontend_url.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
