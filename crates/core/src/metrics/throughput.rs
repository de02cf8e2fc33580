// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Throughput over an adaptive observation window.

use super::{any_heuristic, round1, Explanation, MetricResult, HEURISTIC_FLAG};
use crate::item::WorkItemSnapshot;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Windows shorter than this report a raw count instead of a weekly rate.
pub const MIN_RATE_WINDOW_DAYS: f64 = 7.0;

/// Completed items per week.
///
/// The window spans the earliest to the latest resolution among finished
/// items and is never shorter than one day.
pub fn throughput(historical: &[WorkItemSnapshot]) -> MetricResult {
    let resolutions: Vec<_> = historical
        .iter()
        .filter(|i| i.current_category.is_done())
        .filter_map(|i| i.resolved_at)
        .collect();

    let (Some(earliest), Some(latest)) = (
        resolutions.iter().min().copied(),
        resolutions.iter().max().copied(),
    ) else {
        return MetricResult::value(0.0, "no-completed-items", "none");
    };
    let heuristic = any_heuristic(historical);

    let count = resolutions.len() as f64;
    let days = ((latest - earliest).num_milliseconds() as f64 / MS_PER_DAY).max(1.0);
    let window = format!("{}..{}", earliest.date_naive(), latest.date_naive());

    if days < MIN_RATE_WINDOW_DAYS {
        let code = Explanation::new("window-too-short-for-rate")
            .flag_if(heuristic, HEURISTIC_FLAG)
            .build();
        return MetricResult::value(count, code, window);
    }
    let code = Explanation::new("items-per-week")
        .flag_if(heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(count / (days / 7.0)), code, window)
}

#[cfg(test)]
#[path = "throughput_tests.rs"]
mod tests;
