// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form payloads and their validation.
//!
//! Bounds are checked here, once, before anything reaches the store.
//! The store and the aggregation functions trust what they are given.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::{AppError, Result};
use crate::models::{NewRecord, RecordUpdate};
use crate::time_utils::parse_day;

/// Shortest run accepted by the record form (km).
pub const MIN_DISTANCE_KM: f64 = 0.1;
/// Longest run accepted by the record form (km).
pub const MAX_DISTANCE_KM: f64 = 100.0;
/// Monthly goal bounds (km).
pub const MIN_MONTHLY_GOAL_KM: f64 = 10.0;
pub const MAX_MONTHLY_GOAL_KM: f64 = 500.0;

fn validate_day(value: &str) -> std::result::Result<(), ValidationError> {
    match parse_day(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")
            .with_message("date must be formatted as YYYY-MM-DD".into())),
    }
}

fn parsed_day(raw: &str) -> Result<chrono::NaiveDate> {
    parse_day(raw).ok_or_else(|| AppError::BadRequest(format!("Invalid date '{raw}'")))
}

/// Body of `POST /api/records`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordForm {
    #[validate(custom(function = "validate_day"))]
    pub date: String,
    #[validate(range(min = MIN_DISTANCE_KM, max = MAX_DISTANCE_KM))]
    pub distance: f64,
}

impl RecordForm {
    /// Validate and convert into a record owned by `user_id`.
    pub fn into_new_record(self, user_id: u64) -> Result<NewRecord> {
        self.validate()?;
        Ok(NewRecord {
            user_id,
            date: parsed_day(&self.date)?,
            distance: self.distance,
        })
    }
}

/// Body of `PUT /api/records/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecordUpdateForm {
    #[serde(default)]
    #[validate(custom(function = "validate_day"))]
    pub date: Option<String>,
    #[serde(default)]
    #[validate(range(min = MIN_DISTANCE_KM, max = MAX_DISTANCE_KM))]
    pub distance: Option<f64>,
}

impl RecordUpdateForm {
    pub fn into_update(self) -> Result<RecordUpdate> {
        self.validate()?;
        let update = RecordUpdate {
            user_id: None,
            date: self.date.as_deref().map(parsed_day).transpose()?,
            distance: self.distance,
        };
        if update.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        Ok(update)
    }
}

/// Body of `PUT /api/goal`.
#[derive(Debug, Deserialize, Validate)]
pub struct GoalForm {
    #[validate(range(min = MIN_MONTHLY_GOAL_KM, max = MAX_MONTHLY_GOAL_KM))]
    pub monthly_goal: f64,
}

impl GoalForm {
    pub fn into_goal(self) -> Result<f64> {
        self.validate()?;
        Ok(self.monthly_goal)
    }
}
