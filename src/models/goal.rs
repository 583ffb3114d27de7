// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Monthly goal progress snapshot.
//!
//! Never stored: rebuilt from the user's goal fields and the current
//! record set each time it is requested.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The pace hint spreads what is left over a nominal 30-day month.
const PACE_DAYS: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalSetting {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    /// Goal in kilometers per calendar month
    pub monthly_goal: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub goal_set_date: NaiveDate,
    /// Kilometers logged so far in the current calendar month
    pub current_month_progress: f64,
    pub is_goal_completed: bool,
}

impl GoalSetting {
    /// Completion percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.monthly_goal <= 0.0 {
            return 100.0;
        }
        (self.current_month_progress / self.monthly_goal * 100.0).min(100.0)
    }

    /// Kilometers still needed this month, never negative.
    pub fn remaining(&self) -> f64 {
        (self.monthly_goal - self.current_month_progress).max(0.0)
    }

    /// Kilometers per day needed to close the remaining gap.
    pub fn daily_pace(&self) -> f64 {
        self.remaining() / PACE_DAYS
    }
}
