// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Demo data: the mock runners offered on the login screen and a few
//! months of generated runs for each of them.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::db::RunningLogDb;
use crate::models::{RunningRecord, User};

/// Generated runs fall within this many days before today.
const HISTORY_DAYS: u64 = 90;
/// Inclusive range of runs generated per user.
const MIN_RUNS_PER_USER: usize = 10;
const MAX_RUNS_PER_USER: usize = 15;
/// Generated run distances, in kilometers.
const MIN_RUN_KM: f64 = 1.0;
const MAX_RUN_KM: f64 = 16.0;

/// The fixed mock user directory.
pub fn demo_users() -> Vec<User> {
    let goal_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);
    vec![
        User::new(1, "Running Pro", "138****1234").with_goal(50.0, goal_date),
        User::new(2, "Marathon Wang", "139****5678").with_goal(100.0, goal_date),
        User::new(3, "Morning Jogger", "137****9012").with_goal(30.0, goal_date),
        User::new(4, "Night Runner", "136****3456").with_goal(80.0, goal_date),
        User::new(5, "Fitness Fanatic", "135****7890").with_goal(60.0, goal_date),
    ]
}

/// Generate runs for `users`, most recent first.
///
/// Each user gets 10 to 15 runs dated within the last 90 days, with
/// distances rounded to one decimal.
pub fn demo_records<R: Rng>(
    users: &[User],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<RunningRecord> {
    let mut records = Vec::new();
    let mut next_id = 1;

    for user in users {
        let count = rng.random_range(MIN_RUNS_PER_USER..=MAX_RUNS_PER_USER);
        for _ in 0..count {
            let days_ago = rng.random_range(0..HISTORY_DAYS);
            let date = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);
            let raw_km = rng.random_range(MIN_RUN_KM..MAX_RUN_KM);

            records.push(RunningRecord {
                id: next_id,
                user_id: user.id,
                date,
                distance: (raw_km * 10.0).round() / 10.0,
            });
            next_id += 1;
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Build a store populated with the demo users and generated runs.
///
/// Passing a `seed` makes the generated runs reproducible.
pub fn seed_demo_db(today: NaiveDate, seed: Option<u64>) -> RunningLogDb {
    let users = demo_users();
    let records = match seed {
        Some(seed) => demo_records(&users, today, &mut StdRng::seed_from_u64(seed)),
        None => demo_records(&users, today, &mut rand::rng()),
    };

    tracing::info!(
        users = users.len(),
        records = records.len(),
        seeded = seed.is_some(),
        "Demo data generated"
    );
    RunningLogDb::new(users, records)
}
