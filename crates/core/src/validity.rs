// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Which metrics are meaningful for a project's structure.
//!
//! Flow metrics hold for any project. Iteration-scoped metrics only mean
//! something when the project runs timeboxed iterations. The aggregator
//! computes everything; [`gate`] decides what leaves the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::context::{ProjectKind, StructuralContext, TrackingStrategy};
use crate::error::{Error, Result};
use crate::metrics::MetricResult;

/// Explanation code for a value withheld by the gate.
pub const NOT_APPLICABLE: &str = "not-applicable";

/// Every metric the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Velocity,
    IterationHealth,
    IterationProgress,
    ScopeCreep,
    CycleTime,
    LeadTime,
    Wip,
    WipConsistency,
    Throughput,
    FlowEfficiency,
    Completion,
    HealthStatus,
    StalledItems,
    AssigneeLoad,
}

impl Metric {
    pub const ALL: [Metric; 14] = [
        Metric::Velocity,
        Metric::IterationHealth,
        Metric::IterationProgress,
        Metric::ScopeCreep,
        Metric::CycleTime,
        Metric::LeadTime,
        Metric::Wip,
        Metric::WipConsistency,
        Metric::Throughput,
        Metric::FlowEfficiency,
        Metric::Completion,
        Metric::HealthStatus,
        Metric::StalledItems,
        Metric::AssigneeLoad,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Velocity => "velocity",
            Metric::IterationHealth => "iteration-health",
            Metric::IterationProgress => "iteration-progress",
            Metric::ScopeCreep => "scope-creep",
            Metric::CycleTime => "cycle-time",
            Metric::LeadTime => "lead-time",
            Metric::Wip => "wip",
            Metric::WipConsistency => "wip-consistency",
            Metric::Throughput => "throughput",
            Metric::FlowEfficiency => "flow-efficiency",
            Metric::Completion => "completion",
            Metric::HealthStatus => "health-status",
            Metric::StalledItems => "stalled-items",
            Metric::AssigneeLoad => "assignee-load",
        }
    }

    /// Metrics that hold regardless of how the project is organized.
    pub fn is_flow_family(&self) -> bool {
        matches!(
            self,
            Metric::CycleTime
                | Metric::LeadTime
                | Metric::Wip
                | Metric::WipConsistency
                | Metric::Throughput
                | Metric::FlowEfficiency
        )
    }

    /// Metrics defined in terms of iterations.
    pub fn is_iteration_scoped(&self) -> bool {
        matches!(
            self,
            Metric::Velocity
                | Metric::IterationHealth
                | Metric::IterationProgress
                | Metric::ScopeCreep
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| Error::InvalidMetric(s.to_string()))
    }
}

/// Whether a metric may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Hidden,
}

/// Per-metric validity for one structural context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricValidity(BTreeMap<Metric, Validity>);

impl MetricValidity {
    /// Validity of `metric`. Metrics missing from the matrix are valid.
    pub fn get(&self, metric: Metric) -> Validity {
        self.0.get(&metric).copied().unwrap_or(Validity::Valid)
    }

    pub fn is_valid(&self, metric: Metric) -> bool {
        self.get(metric) == Validity::Valid
    }

    /// Metrics currently hidden, in declaration order.
    pub fn hidden(&self) -> Vec<Metric> {
        self.0
            .iter()
            .filter(|(_, v)| **v == Validity::Hidden)
            .map(|(m, _)| *m)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Validity)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }
}

/// Validity matrix for a project structure. Pure; no I/O.
pub fn compute_metric_validity(
    project_kind: ProjectKind,
    tracking_strategy: TrackingStrategy,
) -> MetricValidity {
    let iterations =
        tracking_strategy == TrackingStrategy::Timeboxed && project_kind.supports_iterations();
    MetricValidity(
        Metric::ALL
            .into_iter()
            .map(|metric| {
                let validity = if metric.is_iteration_scoped() && !iterations {
                    Validity::Hidden
                } else {
                    Validity::Valid
                };
                (metric, validity)
            })
            .collect(),
    )
}

/// Returns true if `metric` may cross the presentation boundary.
pub fn applicable(metric: Metric, context: &StructuralContext) -> bool {
    context.metric_validity.is_valid(metric)
}

/// Withholds the value of every inapplicable metric.
///
/// The entry itself stays so callers can explain why it is empty; raw
/// values are only logged.
pub fn gate(
    results: BTreeMap<Metric, MetricResult>,
    context: &StructuralContext,
) -> BTreeMap<Metric, MetricResult> {
    results
        .into_iter()
        .map(|(metric, result)| {
            if applicable(metric, context) {
                return (metric, result);
            }
            tracing::debug!(
                metric = metric.as_str(),
                raw = ?result.value,
                code = %result.explanation_code,
                "withholding metric for {} context",
                context.tracking_strategy
            );
            let withheld = MetricResult {
                value: None,
                explanation_code: NOT_APPLICABLE.to_string(),
                source_window: result.source_window,
            };
            (metric, withheld)
        })
        .collect()
}

#[cfg(test)]
#[path = "validity_tests.rs"]
mod tests;
