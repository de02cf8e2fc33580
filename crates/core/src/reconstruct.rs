// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Replays an item's status history.
//!
//! Two questions are answered from the same chronologically sorted history:
//! which category an item was in at some past instant, and how long it
//! spent in the active category in total. Items can bounce between
//! categories (reopen, reclose), so active time is the sum of every
//! disjoint active interval rather than first-entry-to-last-exit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::CanonicalCategory;
use crate::classify::{classify, Classification};
use crate::item::WorkItemSnapshot;
use crate::status::StatusTable;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// How a past category was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayMethod {
    /// Replayed from recorded status transitions.
    Changelog,
    /// No status history: active from creation until resolution, done after.
    LeadTimeProxy,
}

impl ReplayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplayMethod::Changelog => "changelog",
            ReplayMethod::LeadTimeProxy => "lead-time-proxy",
        }
    }
}

impl fmt::Display for ReplayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of an item at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAt {
    pub category: CanonicalCategory,
    pub method: ReplayMethod,
    /// True if any status on the replay path was classified heuristically.
    pub heuristic: bool,
}

/// How an active duration was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationMethod {
    /// Sum of active intervals from the changelog.
    Changelog,
    /// Creation to resolution, used when no active interval was recorded.
    LeadTimeFallback,
}

impl DurationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationMethod::Changelog => "changelog",
            DurationMethod::LeadTimeFallback => "lead-time-fallback",
        }
    }
}

impl fmt::Display for DurationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total time an item spent active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDuration {
    pub duration_ms: i64,
    pub method: DurationMethod,
    pub heuristic: bool,
}

impl ActiveDuration {
    pub fn hours(&self) -> f64 {
        self.duration_ms as f64 / MS_PER_HOUR
    }
}

/// Classifies a transition endpoint within the item's own workflow.
fn classify_value(
    value: Option<&str>,
    item: &WorkItemSnapshot,
    table: &StatusTable,
) -> Option<Classification> {
    value.map(|v| classify(v, table, item.item_type.as_deref()))
}

/// Category the item was in before its first recorded status change.
fn seed(item: &WorkItemSnapshot, table: &StatusTable) -> (CanonicalCategory, bool) {
    item.status_transitions()
        .next()
        .and_then(|first| classify_value(first.from_value.as_deref(), item, table))
        .map(|c| (c.category, c.method.is_heuristic()))
        .unwrap_or((CanonicalCategory::NotStarted, false))
}

/// Reconstructs the category `item` was in at `instant`.
pub fn category_at_time(
    item: &WorkItemSnapshot,
    instant: DateTime<Utc>,
    table: &StatusTable,
) -> CategoryAt {
    if item.created_at > instant {
        return CategoryAt {
            category: CanonicalCategory::NotStarted,
            method: ReplayMethod::Changelog,
            heuristic: false,
        };
    }

    if !item.has_status_history() {
        let done = item.resolved_at.is_some_and(|resolved| resolved <= instant);
        return CategoryAt {
            category: if done {
                CanonicalCategory::Done
            } else {
                CanonicalCategory::Active
            },
            method: ReplayMethod::LeadTimeProxy,
            heuristic: false,
        };
    }

    let (mut category, mut heuristic) = seed(item, table);
    for transition in item.status_transitions() {
        if transition.timestamp > instant {
            break;
        }
        if let Some(c) = classify_value(transition.to_value.as_deref(), item, table) {
            category = c.category;
            heuristic |= c.method.is_heuristic();
        }
    }

    CategoryAt {
        category,
        method: ReplayMethod::Changelog,
        heuristic,
    }
}

/// Total time `item` spent in the active category.
///
/// Returns `None` when neither the changelog nor the creation/resolution
/// span yields a positive duration; such items contribute nothing.
pub fn active_duration(item: &WorkItemSnapshot, table: &StatusTable) -> Option<ActiveDuration> {
    let (mut last_category, mut heuristic) = seed(item, table);
    let mut last_timestamp = item.created_at;
    let mut total_ms: i64 = 0;

    for transition in item.status_transitions() {
        if last_category.is_active() {
            total_ms += (transition.timestamp - last_timestamp).num_milliseconds().max(0);
        }
        if let Some(c) = classify_value(transition.to_value.as_deref(), item, table) {
            last_category = c.category;
            heuristic |= c.method.is_heuristic();
        }
        last_timestamp = transition.timestamp;
    }

    if last_category.is_active() {
        if let Some(end) = item.resolved_at.or(item.updated_at) {
            if end > last_timestamp {
                total_ms += (end - last_timestamp).num_milliseconds();
            }
        }
    }

    if total_ms > 0 {
        return Some(ActiveDuration {
            duration_ms: total_ms,
            method: DurationMethod::Changelog,
            heuristic,
        });
    }

    let resolved = item.resolved_at?;
    let lead_ms = (resolved - item.created_at).num_milliseconds();
    (lead_ms > 0).then_some(ActiveDuration {
        duration_ms: lead_ms,
        method: DurationMethod::LeadTimeFallback,
        heuristic,
    })
}

/// Creation-to-resolution span in milliseconds, if the item is resolved
/// after it was created.
pub fn lead_time_ms(item: &WorkItemSnapshot) -> Option<i64> {
    let resolved = item.resolved_at?;
    let ms = (resolved - item.created_at).num_milliseconds();
    (ms > 0).then_some(ms)
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;
