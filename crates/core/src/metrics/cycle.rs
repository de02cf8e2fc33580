// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-in-flow metrics for finished items: cycle time, lead time and flow
//! efficiency.

use super::{any_heuristic, round1, Explanation, MetricResult, HEURISTIC_FLAG};
use crate::item::WorkItemSnapshot;
use crate::reconstruct::{active_duration, lead_time_ms, ActiveDuration, DurationMethod};
use crate::status::StatusTable;

const MS_PER_HOUR: f64 = 3_600_000.0;

fn done_items(historical: &[WorkItemSnapshot]) -> impl Iterator<Item = &WorkItemSnapshot> {
    historical.iter().filter(|i| i.current_category.is_done())
}

fn mean_hours(durations: &[ActiveDuration]) -> f64 {
    let total: f64 = durations.iter().map(ActiveDuration::hours).sum();
    total / durations.len() as f64
}

/// Mean hours finished items spent active.
///
/// Only exact changelog measurements are averaged when any exist. Otherwise
/// the creation-to-resolution fallback is averaged and the result says so.
pub fn cycle_time(historical: &[WorkItemSnapshot], table: &StatusTable) -> MetricResult {
    let (changelog, fallback): (Vec<ActiveDuration>, Vec<ActiveDuration>) = done_items(historical)
        .filter_map(|item| active_duration(item, table))
        .partition(|d| d.method == DurationMethod::Changelog);

    let (used, base) = if !changelog.is_empty() {
        (changelog, DurationMethod::Changelog)
    } else if !fallback.is_empty() {
        (fallback, DurationMethod::LeadTimeFallback)
    } else {
        return MetricResult::absent("insufficient-history", "done-items:0");
    };

    let heuristic = used.iter().any(|d| d.heuristic);
    let code = Explanation::new(base.as_str())
        .flag_if(heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(
        round1(mean_hours(&used)),
        code,
        format!("done-items:{}", used.len()),
    )
}

/// Mean hours from creation to resolution of finished items.
pub fn lead_time(historical: &[WorkItemSnapshot]) -> MetricResult {
    let spans: Vec<i64> = done_items(historical).filter_map(lead_time_ms).collect();
    if spans.is_empty() {
        return MetricResult::absent("insufficient-history", "done-items:0");
    }
    let mean = spans.iter().sum::<i64>() as f64 / spans.len() as f64 / MS_PER_HOUR;
    let code = Explanation::new("created-to-resolved")
        .flag_if(any_heuristic(historical), HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(mean), code, format!("done-items:{}", spans.len()))
}

/// Share of lead time spent actively worked on, in percent.
pub fn flow_efficiency(historical: &[WorkItemSnapshot], table: &StatusTable) -> MetricResult {
    let mut active_ms: i64 = 0;
    let mut lead_ms: i64 = 0;
    let mut counted = 0usize;
    let mut heuristic = false;
    for item in done_items(historical) {
        let Some(active) = active_duration(item, table) else {
            continue;
        };
        if active.method != DurationMethod::Changelog {
            continue;
        }
        if let Some(lead) = lead_time_ms(item) {
            active_ms += active.duration_ms.min(lead);
            lead_ms += lead;
            counted += 1;
            heuristic |= active.heuristic;
        }
    }
    if lead_ms == 0 {
        return MetricResult::absent("insufficient-history", "done-items:0");
    }
    let efficiency = active_ms as f64 / lead_ms as f64 * 100.0;
    let code = Explanation::new("active-over-lead")
        .flag_if(heuristic || any_heuristic(historical), HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(efficiency), code, format!("done-items:{counted}"))
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
