// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Velocity: completed size (or count) per closed iteration.

use chrono::{DateTime, Utc};

use super::{
    any_heuristic, contribution, window_start, Explanation, MetricResult, HEURISTIC_FLAG,
    RESOLUTION_UNKNOWN_FLAG,
};
use crate::config::TelemetryConfig;
use crate::context::{EstimationMode, StructuralContext, TrackingStrategy};
use crate::item::{ClosedIteration, WorkItemSnapshot};

/// Flag set when at least one iteration's items could not be fetched.
pub const PARTIAL_FLAG: &str = "partial";

/// Completed contribution of one closed iteration.
///
/// Items count when they are done and, if the iteration's window is known,
/// were resolved inside it. Returns the sum and whether any counted item's
/// status was guessed.
pub fn iteration_sum(
    items: &[WorkItemSnapshot],
    iteration: &ClosedIteration,
    mode: EstimationMode,
) -> (f64, bool) {
    let window = iteration.summary.window();
    let mut heuristic = false;
    let sum: f64 = items
        .iter()
        .filter(|item| item.current_category.is_done())
        .filter(|item| match window {
            Some((start, end)) => item
                .resolved_at
                .is_some_and(|resolved| resolved >= start && resolved <= end),
            None => true,
        })
        .inspect(|item| heuristic |= item.current_method.is_heuristic())
        .map(|item| contribution(item, mode))
        .sum();
    (sum, heuristic)
}

/// Average completed contribution over closed iterations.
///
/// Outside timeboxed contexts a pseudo-velocity is computed instead; the
/// validity gate withholds it either way.
pub fn velocity(
    iterations: &[ClosedIteration],
    historical: &[WorkItemSnapshot],
    context: &StructuralContext,
    config: &TelemetryConfig,
    now: DateTime<Utc>,
) -> MetricResult {
    if context.tracking_strategy != TrackingStrategy::Timeboxed {
        return pseudo_velocity(historical, config, now);
    }

    let window = format!("closed-iterations:{}", iterations.len());
    if iterations.is_empty() {
        return MetricResult::value(0.0, "no-closed-iterations", window);
    }

    let mut total = 0.0;
    let mut partial = false;
    let mut heuristic = false;
    for iteration in iterations {
        match &iteration.items {
            Some(items) => {
                let (sum, guessed) = iteration_sum(items, iteration, context.estimation_mode);
                total += sum;
                heuristic |= guessed;
            }
            None => partial = true,
        }
    }

    let average = total / iterations.len() as f64;
    let base = match context.estimation_mode {
        EstimationMode::Size => "size-based",
        EstimationMode::Count => "count-based",
    };
    let code = Explanation::new(base)
        .flag_if(context.size_field.is_none(), "no-size-field")
        .flag_if(partial, PARTIAL_FLAG)
        .flag_if(heuristic, HEURISTIC_FLAG)
        .build();
    MetricResult::value(average.round(), code, window)
}

/// Completed items per normalization window for projects without
/// iterations.
///
/// Finished items without a resolution date cannot be placed in the window;
/// they are left out and the result is flagged `resolution-unknown`.
pub fn pseudo_velocity(
    historical: &[WorkItemSnapshot],
    config: &TelemetryConfig,
    now: DateTime<Utc>,
) -> MetricResult {
    let days = config.effective_window_days();
    let since = window_start(now, days);
    let done: Vec<&WorkItemSnapshot> = historical
        .iter()
        .filter(|item| item.current_category.is_done())
        .collect();
    let completed = done
        .iter()
        .filter(|item| {
            item.resolved_at
                .is_some_and(|resolved| resolved > since && resolved <= now)
        })
        .count();
    let code = Explanation::new("pseudo-velocity")
        .flag_if(done.iter().any(|i| i.resolved_at.is_none()), RESOLUTION_UNKNOWN_FLAG)
        .flag_if(any_heuristic(historical), HEURISTIC_FLAG)
        .build();
    MetricResult::value(completed as f64, code, format!("last-{days}d"))
}

#[cfg(test)]
#[path = "velocity_tests.rs"]
mod tests;
