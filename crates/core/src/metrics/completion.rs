// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion ratio of the current board.

use chrono::{DateTime, Utc};

use super::{
    any_heuristic, contribution, round1, window_start, Explanation, MetricResult, HEURISTIC_FLAG,
    RESOLUTION_UNKNOWN_FLAG,
};
use crate::config::TelemetryConfig;
use crate::context::{EstimationMode, ProjectKind, StructuralContext};
use crate::item::WorkItemSnapshot;

/// Percentage of current scope that is done.
///
/// Count-based projects, and business projects regardless of estimation,
/// weigh every item as 1. Business projects also drop finished items
/// resolved before the normalization window so old closures do not pin the
/// ratio near 100%. Finished items with no resolution date stay in scope and
/// mark the result as `resolution-unknown`.
pub fn completion(
    current: &[WorkItemSnapshot],
    context: &StructuralContext,
    config: &TelemetryConfig,
    now: DateTime<Utc>,
) -> MetricResult {
    let generic = context.project_kind == ProjectKind::Generic;
    let window = if generic {
        format!("current-board:last-{}d", config.effective_window_days())
    } else {
        "current-board".to_string()
    };

    let since = window_start(now, config.effective_window_days());
    let scope: Vec<&WorkItemSnapshot> = current
        .iter()
        .filter(|item| {
            !generic
                || !item.current_category.is_done()
                || !item.resolved_at.is_some_and(|r| r <= since)
        })
        .collect();
    let unresolved = generic
        && scope
            .iter()
            .any(|i| i.current_category.is_done() && i.resolved_at.is_none());
    if scope.is_empty() {
        return MetricResult::absent("no-items", window);
    }

    let mut mode = if generic {
        EstimationMode::Count
    } else {
        context.estimation_mode
    };
    let mut base = match mode {
        EstimationMode::Size => "size-based",
        EstimationMode::Count => "count-based",
    };
    let totals = |mode| {
        scope.iter().fold((0.0, 0.0), |(done, total), item| {
            let c = contribution(item, mode);
            if item.current_category.is_done() {
                (done + c, total + c)
            } else {
                (done, total + c)
            }
        })
    };

    let (mut done, mut total) = totals(mode);
    if total <= 0.0 {
        mode = EstimationMode::Count;
        base = "unestimated-count-fallback";
        (done, total) = totals(mode);
    }

    let heuristic = any_heuristic(scope.iter().copied());
    let code = Explanation::new(base)
        .flag_if(
            mode == EstimationMode::Count && context.size_field.is_none() && !generic,
            "no-size-field",
        )
        .flag_if(generic, "generic-project")
        .flag_if(unresolved, RESOLUTION_UNKNOWN_FLAG)
        .flag_if(heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(done / total * 100.0), code, window)
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
