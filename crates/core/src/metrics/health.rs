// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Three-state health classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Explanation, MetricResult};
use crate::context::TrackingStrategy;

/// Overall delivery health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    Optimal,
    Warning,
    Critical,
}

impl HealthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLevel::Optimal => "optimal",
            HealthLevel::Warning => "warning",
            HealthLevel::Critical => "critical",
        }
    }

    /// Numeric form carried in the metric value.
    pub fn ordinal(&self) -> u8 {
        match self {
            HealthLevel::Optimal => 0,
            HealthLevel::Warning => 1,
            HealthLevel::Critical => 2,
        }
    }

    pub fn from_ordinal(value: f64) -> Option<Self> {
        match value.round() as i64 {
            0 => Some(HealthLevel::Optimal),
            1 => Some(HealthLevel::Warning),
            2 => Some(HealthLevel::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applies the threshold table for `strategy`.
///
/// Timeboxed work is judged on pace and WIP; flow work on WIP alone.
pub fn classify_health(strategy: TrackingStrategy, pace_delta: f64, wip_load: f64) -> HealthLevel {
    match strategy {
        TrackingStrategy::Timeboxed => {
            if pace_delta < -20.0 || wip_load > 120.0 {
                HealthLevel::Critical
            } else if pace_delta < -10.0 || wip_load > 90.0 {
                HealthLevel::Warning
            } else {
                HealthLevel::Optimal
            }
        }
        TrackingStrategy::Continuous | TrackingStrategy::None => {
            if wip_load > 100.0 {
                HealthLevel::Critical
            } else if wip_load > 85.0 {
                HealthLevel::Warning
            } else {
                HealthLevel::Optimal
            }
        }
    }
}

/// Health as a metric. Missing inputs count as zero and are flagged.
pub fn health_status(
    strategy: TrackingStrategy,
    pace_delta: Option<f64>,
    wip_load: Option<f64>,
) -> MetricResult {
    let level = classify_health(
        strategy,
        pace_delta.unwrap_or(0.0),
        wip_load.unwrap_or(0.0),
    );
    let code = Explanation::new(level.as_str())
        .flag_if(
            strategy == TrackingStrategy::Timeboxed && pace_delta.is_none(),
            "no-pace-data",
        )
        .flag_if(wip_load.is_none(), "no-wip-data")
        .build();
    MetricResult::value(f64::from(level.ordinal()), code, strategy.as_str())
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
