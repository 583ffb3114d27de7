// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregation;
pub mod seed;

pub use aggregation::{average_distance, goal_progress, rankings, total_distance};
pub use seed::seed_demo_db;
