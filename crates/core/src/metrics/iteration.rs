// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics about the iteration in progress: elapsed time, pace against
//! velocity and scope added after the start.

use chrono::{DateTime, Utc};

use super::{any_heuristic, contribution, round1, Explanation, MetricResult, HEURISTIC_FLAG};
use crate::context::StructuralContext;
use crate::item::{IterationSummary, WorkItemSnapshot};

const NO_ACTIVE_ITERATION: &str = "no-active-iteration";
const DATES_UNKNOWN: &str = "iteration-dates-unknown";

fn iteration_window(iteration: &IterationSummary) -> String {
    format!("iteration:{}", iteration.id)
}

/// Fraction of the iteration's duration that has elapsed, clamped to
/// `[0, 1]`. `None` when the dates are unknown or inverted.
pub fn elapsed_fraction(iteration: &IterationSummary, now: DateTime<Utc>) -> Option<f64> {
    let (start, end) = iteration.window()?;
    let length = (end - start).num_milliseconds();
    if length <= 0 {
        return None;
    }
    let elapsed = (now - start).num_milliseconds() as f64 / length as f64;
    Some(elapsed.clamp(0.0, 1.0))
}

/// Elapsed time of the active iteration, in percent.
pub fn iteration_progress(active: Option<&IterationSummary>, now: DateTime<Utc>) -> MetricResult {
    let Some(iteration) = active else {
        return MetricResult::absent(NO_ACTIVE_ITERATION, "none");
    };
    match elapsed_fraction(iteration, now) {
        Some(fraction) => MetricResult::value(
            round1(fraction * 100.0),
            "elapsed-time",
            iteration_window(iteration),
        ),
        None => MetricResult::absent(DATES_UNKNOWN, iteration_window(iteration)),
    }
}

/// How far ahead of (positive) or behind (negative) expected pace the
/// active iteration is, in percent.
///
/// Expected pace is velocity scaled by elapsed time. Without a velocity the
/// completion percentage is compared to the elapsed percentage instead.
pub fn iteration_health(
    current: &[WorkItemSnapshot],
    active: Option<&IterationSummary>,
    velocity: Option<f64>,
    context: &StructuralContext,
    now: DateTime<Utc>,
) -> MetricResult {
    let Some(iteration) = active else {
        return MetricResult::absent(NO_ACTIVE_ITERATION, "none");
    };
    let window = iteration_window(iteration);
    let Some(fraction) = elapsed_fraction(iteration, now) else {
        return MetricResult::absent(DATES_UNKNOWN, window);
    };

    let mode = context.estimation_mode;
    let (done, total) = current.iter().fold((0.0, 0.0), |(done, total), item| {
        let c = contribution(item, mode);
        if item.current_category.is_done() {
            (done + c, total + c)
        } else {
            (done, total + c)
        }
    });

    let (delta, base) = match velocity {
        Some(v) if v > 0.0 => ((done - v * fraction) / v * 100.0, "velocity-pace"),
        _ => {
            let completion = if total > 0.0 { done / total } else { 0.0 };
            ((completion - fraction) * 100.0, "completion-pace")
        }
    };
    let code = Explanation::new(base)
        .flag_if(any_heuristic(current), HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(delta), code, window)
}

/// Share of current items created after the active iteration started.
///
/// Categories play no part in the share; the heuristic flag still marks
/// boards whose statuses were guessed so every iteration metric reads alike.
pub fn scope_creep(
    current: &[WorkItemSnapshot],
    active: Option<&IterationSummary>,
) -> MetricResult {
    let Some(iteration) = active else {
        return MetricResult::absent(NO_ACTIVE_ITERATION, "none");
    };
    let window = iteration_window(iteration);
    let Some(start) = iteration.start else {
        return MetricResult::absent(DATES_UNKNOWN, window);
    };
    if current.is_empty() {
        return MetricResult::absent("no-items", window);
    }
    let added = current.iter().filter(|i| i.created_at > start).count();
    let share = added as f64 / current.len() as f64 * 100.0;
    let code = Explanation::new("added-after-start")
        .flag_if(any_heuristic(current), HEURISTIC_FLAG)
        .build();
    MetricResult::value(round1(share), code, window)
}

#[cfg(test)]
#[path = "iteration_tests.rs"]
mod tests;
