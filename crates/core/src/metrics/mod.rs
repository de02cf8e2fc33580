// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Metric aggregation.
//!
//! Each metric function takes reconstructed per-item facts plus context and
//! returns a [`MetricResult`]. None of them fail: missing data becomes an
//! absent value, or an explicit zero, with an explanation code saying
//! which path was taken.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::TelemetryConfig;
use crate::context::{EstimationMode, StructuralContext};
use crate::item::{ClosedIteration, IterationSummary, WorkItemSnapshot};
use crate::validity::Metric;

pub mod completion;
pub mod cycle;
pub mod health;
pub mod iteration;
pub mod throughput;
pub mod velocity;
pub mod wip;

pub use health::HealthLevel;

/// Flag appended when any contributing status was classified by guesswork.
pub const HEURISTIC_FLAG: &str = "heuristic";

/// Flag appended when finished items without a resolution date were counted
/// as in scope or left out of a window.
pub const RESOLUTION_UNKNOWN_FLAG: &str = "resolution-unknown";

/// One computed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// The metric value; absent when it could not be computed.
    pub value: Option<f64>,
    /// Machine-readable description of the calculation path.
    pub explanation_code: String,
    /// The data window the value was derived from.
    pub source_window: String,
}

impl MetricResult {
    pub fn value(value: f64, code: impl Into<String>, window: impl Into<String>) -> Self {
        MetricResult {
            value: Some(value),
            explanation_code: code.into(),
            source_window: window.into(),
        }
    }

    pub fn absent(code: impl Into<String>, window: impl Into<String>) -> Self {
        MetricResult {
            value: None,
            explanation_code: code.into(),
            source_window: window.into(),
        }
    }

    /// Returns true if the explanation code carries `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.explanation_code.split('+').skip(1).any(|f| f == flag)
    }
}

/// Builds `base+flag+flag` explanation codes.
#[derive(Debug, Clone)]
pub(crate) struct Explanation {
    code: String,
}

impl Explanation {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Explanation { code: base.into() }
    }

    pub(crate) fn flag_if(mut self, condition: bool, flag: &str) -> Self {
        if condition {
            self.code.push('+');
            self.code.push_str(flag);
        }
        self
    }

    pub(crate) fn build(self) -> String {
        self.code
    }
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Returns true if any of `items` had its category guessed.
pub(crate) fn any_heuristic<'a>(items: impl IntoIterator<Item = &'a WorkItemSnapshot>) -> bool {
    items.into_iter().any(|i| i.current_method.is_heuristic())
}

/// Start of a window of `days` ending at `now`. Windows reaching past the
/// representable range start at the earliest instant.
pub(crate) fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Size or count an item contributes under `mode`.
pub(crate) fn contribution(item: &WorkItemSnapshot, mode: EstimationMode) -> f64 {
    match mode {
        EstimationMode::Size => item.size_estimate.unwrap_or(0.0).max(0.0),
        EstimationMode::Count => 1.0,
    }
}

/// Everything the aggregator reads for one request.
#[derive(Debug, Clone, Copy)]
pub struct AggregationInput<'a> {
    /// Items currently on the board (or in the active iteration).
    pub current: &'a [WorkItemSnapshot],
    /// Items with history, used for reconstruction.
    pub historical: &'a [WorkItemSnapshot],
    pub closed_iterations: &'a [ClosedIteration],
    pub active_iteration: Option<&'a IterationSummary>,
}

/// Computes every metric. The result is raw: apply
/// [`crate::validity::gate`] before handing it on.
pub fn compute(
    input: &AggregationInput<'_>,
    context: &StructuralContext,
    config: &TelemetryConfig,
    now: DateTime<Utc>,
) -> BTreeMap<Metric, MetricResult> {
    let table = &context.status_table;
    let mut results = BTreeMap::new();

    let wip_load = wip::wip_load(input.current, config);
    let velocity = velocity::velocity(
        input.closed_iterations,
        input.historical,
        context,
        config,
        now,
    );
    let pace = iteration::iteration_health(
        input.current,
        input.active_iteration,
        velocity.value,
        context,
        now,
    );
    let health = health::health_status(context.tracking_strategy, pace.value, wip_load.value);

    results.insert(
        Metric::WipConsistency,
        wip::wip_consistency(input.current, input.historical, table, now),
    );
    results.insert(Metric::StalledItems, wip::stalled_items(input.current, config, now));
    results.insert(Metric::AssigneeLoad, wip::assignee_load(input.current, config));
    results.insert(Metric::CycleTime, cycle::cycle_time(input.historical, table));
    results.insert(Metric::LeadTime, cycle::lead_time(input.historical));
    results.insert(
        Metric::FlowEfficiency,
        cycle::flow_efficiency(input.historical, table),
    );
    results.insert(Metric::Throughput, throughput::throughput(input.historical));
    results.insert(
        Metric::Completion,
        completion::completion(input.current, context, config, now),
    );
    results.insert(
        Metric::IterationProgress,
        iteration::iteration_progress(input.active_iteration, now),
    );
    results.insert(
        Metric::ScopeCreep,
        iteration::scope_creep(input.current, input.active_iteration),
    );
    results.insert(Metric::Wip, wip_load);
    results.insert(Metric::Velocity, velocity);
    results.insert(Metric::IterationHealth, pace);
    results.insert(Metric::HealthStatus, health);

    results
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
