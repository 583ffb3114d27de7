// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Mock runner identity selectable on the login screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Externally assigned user ID
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Display name
    pub nickname: String,
    /// Masked phone label, display only
    pub phone: String,
    /// Monthly distance goal in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_goal: Option<f64>,
    /// Date the goal was last set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub goal_set_date: Option<NaiveDate>,
}

impl User {
    pub fn new(id: u64, nickname: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            phone: phone.into(),
            monthly_goal: None,
            goal_set_date: None,
        }
    }

    /// Builder-style helper used when seeding users with a goal.
    pub fn with_goal(mut self, monthly_goal: f64, goal_set_date: NaiveDate) -> Self {
        self.monthly_goal = Some(monthly_goal);
        self.goal_set_date = Some(goal_set_date);
        self
    }

    /// A zero goal counts as "not set", matching how the goal panel treats it.
    pub fn has_goal(&self) -> bool {
        self.monthly_goal.is_some_and(|goal| goal > 0.0)
    }
}
