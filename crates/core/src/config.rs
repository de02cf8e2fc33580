// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry settings supplied by the caller's settings store.
//!
//! The engine treats this as read-only input. Every field has a default so
//! partial configuration files deserialize cleanly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest normalization window the business-project paths accept.
pub const MIN_NORMALIZATION_WINDOW_DAYS: i64 = 7;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Team WIP limit. Zero or negative disables the WIP load metric.
    pub wip_limit: i64,
    /// Active items one assignee is expected to carry.
    pub assignee_capacity: i64,
    /// Hours without activity after which an active item counts as stalled.
    pub stalled_threshold_hours: f64,
    /// Field names tried, in order, when discovering the size field.
    pub size_field_candidates: Vec<String>,
    /// Use current board items as history when the history fetch is empty.
    pub include_board_items_when_empty: bool,
    /// Locale tag for presentation (e.g. `en-US`, `de-DE`).
    pub locale: String,
    /// Window for completion and pseudo-velocity on non-iteration projects.
    pub normalization_window_days: i64,
    /// Lifetime of cached status tables and size field ids.
    pub cache_ttl_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            wip_limit: 0,
            assignee_capacity: 0,
            stalled_threshold_hours: 72.0,
            size_field_candidates: vec![
                "Story Points".to_string(),
                "Story point estimate".to_string(),
                "Estimate".to_string(),
                "Size".to_string(),
            ],
            include_board_items_when_empty: false,
            locale: "en-US".to_string(),
            normalization_window_days: 14,
            cache_ttl_secs: 300,
        }
    }
}

impl TelemetryConfig {
    /// Normalization window in days, floored at [`MIN_NORMALIZATION_WINDOW_DAYS`].
    pub fn effective_window_days(&self) -> i64 {
        self.normalization_window_days
            .max(MIN_NORMALIZATION_WINDOW_DAYS)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
