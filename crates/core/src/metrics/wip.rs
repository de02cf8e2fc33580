// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work-in-progress metrics: load, stability over time, stalled work and
//! per-assignee load.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use super::{any_heuristic, round1, Explanation, MetricResult, HEURISTIC_FLAG};
use crate::config::TelemetryConfig;
use crate::item::WorkItemSnapshot;
use crate::reconstruct::{category_at_time, ReplayMethod};
use crate::status::StatusTable;

/// Days back from now at which WIP is sampled, besides now itself.
pub const SAMPLE_OFFSETS_DAYS: [i64; 3] = [7, 14, 21];

const CURRENT_BOARD: &str = "current-board";

fn active_items(items: &[WorkItemSnapshot]) -> impl Iterator<Item = &WorkItemSnapshot> {
    items.iter().filter(|i| i.current_category.is_active())
}

/// Active items as a percentage of the configured WIP limit.
pub fn wip_load(current: &[WorkItemSnapshot], config: &TelemetryConfig) -> MetricResult {
    if config.wip_limit <= 0 {
        return MetricResult::absent("no-limit-configured", CURRENT_BOARD);
    }
    let active = active_items(current).count();
    let load = active as f64 / config.wip_limit as f64 * 100.0;
    let code = Explanation::new("active-over-limit")
        .flag_if(any_heuristic(current), HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(load), code, CURRENT_BOARD)
}

/// A WIP sample set: now plus one sample per [`SAMPLE_OFFSETS_DAYS`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WipSamples {
    pub counts: [f64; 4],
    pub heuristic: bool,
    pub proxied: bool,
}

/// Counts active items now (live) and at each past offset (replayed).
pub fn wip_samples(
    current: &[WorkItemSnapshot],
    historical: &[WorkItemSnapshot],
    table: &StatusTable,
    now: DateTime<Utc>,
) -> WipSamples {
    let mut counts = [0.0; 4];
    let mut heuristic = any_heuristic(current);
    let mut proxied = false;

    counts[0] = active_items(current).count() as f64;
    for (slot, days) in SAMPLE_OFFSETS_DAYS.iter().enumerate() {
        let instant = now - Duration::days(*days);
        let mut active = 0usize;
        for item in historical {
            let at = category_at_time(item, instant, table);
            heuristic |= at.heuristic;
            proxied |= at.method == ReplayMethod::LeadTimeProxy && item.created_at <= instant;
            if at.category.is_active() {
                active += 1;
            }
        }
        counts[slot + 1] = active as f64;
    }

    WipSamples {
        counts,
        heuristic,
        proxied,
    }
}

/// Population standard deviation of weekly WIP samples.
pub fn wip_consistency(
    current: &[WorkItemSnapshot],
    historical: &[WorkItemSnapshot],
    table: &StatusTable,
    now: DateTime<Utc>,
) -> MetricResult {
    const WINDOW: &str = "last-21d";

    let samples = wip_samples(current, historical, table, now);
    let n = samples.counts.len() as f64;
    let mean = samples.counts.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return MetricResult::value(0.0, "wip-always-zero", WINDOW);
    }

    let variance = samples
        .counts
        .iter()
        .map(|c| (c - mean).powi(2))
        .sum::<f64>()
        / n;
    let code = Explanation::new(format!("mean={}", round1(mean)))
        .flag_if(samples.proxied, "lead-time-proxy")
        .flag_if(samples.heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(variance.sqrt()), code, WINDOW)
}

/// Active items with no activity for longer than the stalled threshold.
pub fn stalled_items(
    current: &[WorkItemSnapshot],
    config: &TelemetryConfig,
    now: DateTime<Utc>,
) -> MetricResult {
    if config.stalled_threshold_hours <= 0.0 {
        return MetricResult::absent("no-threshold-configured", CURRENT_BOARD);
    }
    let threshold_ms = config.stalled_threshold_hours * 3_600_000.0;
    let stalled = active_items(current)
        .filter(|item| (now - item.last_activity()).num_milliseconds() as f64 > threshold_ms)
        .count();
    let code = Explanation::new("inactive-over-threshold")
        .flag_if(any_heuristic(current), HEURISTIC_FLAG)
        .build();
    MetricResult::value(stalled as f64, code, CURRENT_BOARD)
}

/// Heaviest per-assignee active load as a percentage of capacity.
pub fn assignee_load(current: &[WorkItemSnapshot], config: &TelemetryConfig) -> MetricResult {
    if config.assignee_capacity <= 0 {
        return MetricResult::absent("no-capacity-configured", CURRENT_BOARD);
    }
    let mut per_assignee: HashMap<&str, usize> = HashMap::new();
    for item in active_items(current) {
        if let Some(assignee) = item.assignee.as_deref() {
            *per_assignee.entry(assignee).or_default() += 1;
        }
    }
    let heuristic = any_heuristic(current);
    let Some(max) = per_assignee.values().copied().max() else {
        let code = Explanation::new("no-assigned-work")
            .flag_if(heuristic, HEURISTIC_FLAG)
            .build();
        return MetricResult::value(0.0, code, CURRENT_BOARD);
    };
    let load = max as f64 / config.assignee_capacity as f64 * 100.0;
    let code = Explanation::new("max-per-assignee")
        .flag_if(heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(load), code, CURRENT_BOARD)
}

#[cfg(test)]
#[path = "wip_tests.rs"]
mod tests;
