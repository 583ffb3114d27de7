// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process record store with typed operations.
//!
//! Provides operations for:
//! - Users (mock directory, goal updates)
//! - Running records (add, partial update, delete, per-user listing)
//!
//! Records are kept most-recent-first: new records go to the front.

use chrono::NaiveDate;

use crate::models::{NewRecord, RecordUpdate, RunningRecord, User};

/// Owned store for users and their running records.
///
/// One instance lives for the whole process and is handed by reference
/// to whatever needs it.
#[derive(Debug, Clone)]
pub struct RunningLogDb {
    users: Vec<User>,
    records: Vec<RunningRecord>,
    /// Lowest ID that has never been handed out.
    next_record_id: u64,
}

impl Default for RunningLogDb {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl RunningLogDb {
    /// Build a store from an initial user directory and record list.
    ///
    /// `records` is taken in store order (most recent first).
    pub fn new(users: Vec<User>, records: Vec<RunningRecord>) -> Self {
        let next_record_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            users,
            records,
            next_record_id,
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn has_goal(&self, user_id: u64) -> bool {
        self.user(user_id).is_some_and(User::has_goal)
    }

    /// Set a user's monthly goal and stamp the goal-set date.
    ///
    /// Returns the updated user, or `None` if the user is unknown.
    pub fn set_user_goal(
        &mut self,
        user_id: u64,
        monthly_goal: f64,
        today: NaiveDate,
    ) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == user_id)?;
        user.monthly_goal = Some(monthly_goal);
        user.goal_set_date = Some(today);

        tracing::debug!(user_id, monthly_goal, %today, "Monthly goal set");
        Some(user.clone())
    }

    // ─── Record Operations ───────────────────────────────────────

    /// All records in store order.
    pub fn records(&self) -> &[RunningRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, record_id: u64) -> Option<&RunningRecord> {
        self.records.iter().find(|r| r.id == record_id)
    }

    /// Store a new record at the front and return it with its ID.
    ///
    /// The ID is one past the largest ID currently stored, but never one
    /// that was already issued and later deleted.
    pub fn add(&mut self, record: NewRecord) -> RunningRecord {
        let max_existing = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        let id = self.next_record_id.max(max_existing + 1);
        self.next_record_id = id + 1;

        let stored = record.into_record(id);
        self.records.insert(0, stored.clone());

        tracing::debug!(
            record_id = id,
            user_id = stored.user_id,
            distance = stored.distance,
            "Record added"
        );
        stored
    }

    /// Merge `update` into the record with `record_id`.
    ///
    /// Returns `None` when no such record exists.
    pub fn update(&mut self, record_id: u64, update: &RecordUpdate) -> Option<RunningRecord> {
        let record = self.records.iter_mut().find(|r| r.id == record_id)?;
        update.apply(record);

        tracing::debug!(record_id, "Record updated");
        Some(record.clone())
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&mut self, record_id: u64) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == record_id) else {
            return false;
        };
        self.records.remove(index);

        tracing::debug!(record_id, "Record deleted");
        true
    }

    /// Records owned by `user_id`, in store order.
    pub fn list_by_user(&self, user_id: u64) -> Vec<RunningRecord> {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}
