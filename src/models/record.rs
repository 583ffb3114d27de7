// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Running record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One logged run, owned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunningRecord {
    /// Store-assigned record ID (never reused)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Owning user ID
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub user_id: u64,
    /// Day of the run ("YYYY-MM-DD")
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// Distance in kilometers
    pub distance: f64,
}

/// Record payload before the store assigns an ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub user_id: u64,
    pub date: NaiveDate,
    pub distance: f64,
}

impl NewRecord {
    pub(crate) fn into_record(self, id: u64) -> RunningRecord {
        RunningRecord {
            id,
            user_id: self.user_id,
            date: self.date,
            distance: self.distance,
        }
    }
}

/// Partial replacement of a record's fields. The ID is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl RecordUpdate {
    pub fn distance(distance: f64) -> Self {
        Self {
            distance: Some(distance),
            ..Self::default()
        }
    }

    /// Merge the supplied fields into `record`, leaving the rest untouched.
    pub(crate) fn apply(&self, record: &mut RunningRecord) {
        if let Some(user_id) = self.user_id {
            record.user_id = user_id;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(distance) = self.distance {
            record.distance = distance;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.date.is_none() && self.distance.is_none()
    }
}
