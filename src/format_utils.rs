// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display labels for distances and leaderboard positions.

/// One-decimal distance label, e.g. `"5.2 km"`.
pub fn format_distance(km: f64) -> String {
    format!("{km:.1} km")
}

/// Total-distance label; totals of 1000 km and up are shortened to `"1.2k km"`.
pub fn format_total_distance(km: f64) -> String {
    if km >= 1000.0 {
        format!("{:.1}k km", km / 1000.0)
    } else {
        format_distance(km)
    }
}

/// Leaderboard label with medals for the podium.
pub fn rank_label(rank: u32) -> String {
    match rank {
        1 => "🥇 #1".to_string(),
        2 => "🥈 #2".to_string(),
        3 => "🥉 #3".to_string(),
        n => format!("#{n}"),
    }
}
