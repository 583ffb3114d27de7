// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived views over the record store.
//!
//! Everything here is a pure function of a store snapshot: nothing is
//! cached, and every call recomputes from the full record set.

use chrono::NaiveDate;

use crate::models::{GoalSetting, RankingItem, RunningRecord, User};
use crate::time_utils::same_month;

/// Sum of all distances logged by `user_id`. Zero when the user has no records.
pub fn total_distance(records: &[RunningRecord], user_id: u64) -> f64 {
    records
        .iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| r.distance)
        .sum()
}

/// Mean distance per run across `records`. Zero when there are none.
pub fn average_distance(records: &[RunningRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.distance).sum::<f64>() / records.len() as f64
}

/// Leaderboard of every known user, highest total first.
///
/// Users without records are included with a total of 0. Records whose
/// owner is not in `users` contribute to nobody. Ties keep the order of
/// `users` (stable sort).
pub fn rankings(users: &[User], records: &[RunningRecord]) -> Vec<RankingItem> {
    let mut items: Vec<RankingItem> = users
        .iter()
        .map(|user| RankingItem {
            rank: 0,
            user: user.clone(),
            total_distance: total_distance(records, user.id),
        })
        .collect();

    items.sort_by(|a, b| b.total_distance.total_cmp(&a.total_distance));

    for (index, item) in items.iter_mut().enumerate() {
        item.rank = index as u32 + 1;
    }
    items
}

/// Goal progress for `user` in the calendar month containing `today`.
///
/// Returns `None` when the user has not declared a monthly goal.
pub fn goal_progress(
    user: &User,
    records: &[RunningRecord],
    today: NaiveDate,
) -> Option<GoalSetting> {
    let monthly_goal = user.monthly_goal.filter(|goal| *goal > 0.0)?;

    let current_month_progress: f64 = records
        .iter()
        .filter(|r| r.user_id == user.id && same_month(r.date, today))
        .map(|r| r.distance)
        .sum();

    Some(GoalSetting {
        user_id: user.id,
        monthly_goal,
        goal_set_date: user.goal_set_date.unwrap_or(today),
        current_month_progress,
        is_goal_completed: current_month_progress >= monthly_goal,
    })
}
