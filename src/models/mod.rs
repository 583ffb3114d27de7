// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod goal;
pub mod ranking;
pub mod record;
pub mod user;

pub use goal::GoalSetting;
pub use ranking::RankingItem;
pub use record::{NewRecord, RecordUpdate, RunningRecord};
pub use user::User;
