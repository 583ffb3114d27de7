// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Running-log: record daily runs, chase a monthly goal, climb the leaderboard.
//!
//! This crate provides the record store, the ranking and goal aggregation
//! over it, and a JSON API for a front-end that lets a visitor pick one of
//! the mock runners and manage their runs.

pub mod config;
pub mod db;
pub mod error;
pub mod format_utils;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{RunningLogDb, SessionStore};
use tokio::sync::RwLock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// The single record store for this process
    pub db: RwLock<RunningLogDb>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, db: RunningLogDb) -> Self {
        Self {
            config,
            db: RwLock::new(db),
            sessions: SessionStore::new(),
        }
    }
}
