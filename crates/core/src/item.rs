// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Work item snapshots and their change history.
//!
//! [`ItemRecord`] is the loosely-shaped record an item data source hands
//! over. It is turned into an immutable [`WorkItemSnapshot`] exactly once
//! per request: the current status is classified, the size estimate is
//! resolved and transitions are put in chronological order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::CanonicalCategory;
use crate::classify::{classify, ClassificationMethod};
use crate::status::StatusTable;

/// Field name of status changes in an item's history.
pub const STATUS_FIELD: &str = "status";

/// One field change in an item's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
    /// Which field changed. Only `status` changes drive reconstruction.
    pub field: String,
    /// Status id or name before the change.
    #[serde(default, alias = "from", skip_serializing_if = "Option::is_none")]
    pub from_value: Option<String>,
    /// Status id or name after the change.
    #[serde(default, alias = "to", skip_serializing_if = "Option::is_none")]
    pub to_value: Option<String>,
}

impl TransitionEvent {
    /// Creates a status transition.
    pub fn status(timestamp: DateTime<Utc>, from: Option<&str>, to: Option<&str>) -> Self {
        TransitionEvent {
            timestamp,
            field: STATUS_FIELD.to_string(),
            from_value: from.map(str::to_string),
            to_value: to.map(str::to_string),
        }
    }

    /// Returns true if this event records a status change.
    pub fn is_status(&self) -> bool {
        self.field.eq_ignore_ascii_case(STATUS_FIELD)
    }
}

/// A work item as delivered by an item data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Current status id or name.
    pub status: String,
    /// Current status display name, when the tracker reports it separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Explicit size estimate (story points or similar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_estimate: Option<f64>,
    /// Numeric custom fields keyed by field id; consulted for the size field
    /// when no explicit estimate is given.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub fields: HashMap<String, f64>,
    #[serde(default)]
    pub transitions: Vec<TransitionEvent>,
}

/// Immutable, per-request view of one work item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItemSnapshot {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub current_category: CanonicalCategory,
    pub current_status_name: String,
    /// How `current_category` was determined.
    pub current_method: ClassificationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_estimate: Option<f64>,
    #[serde(skip)]
    transitions: Vec<TransitionEvent>,
}

impl WorkItemSnapshot {
    /// Builds a snapshot from a data source record.
    ///
    /// `size_field` names the custom field holding size estimates; an
    /// explicit `size_estimate` on the record takes precedence.
    pub fn from_record(record: ItemRecord, table: &StatusTable, size_field: Option<&str>) -> Self {
        let classification = classify(&record.status, table, record.item_type.as_deref());
        let current_status_name = record
            .status_name
            .clone()
            .or_else(|| {
                table
                    .project()
                    .by_id(&record.status)
                    .map(|e| e.display_name.clone())
            })
            .unwrap_or_else(|| record.status.clone());
        let size_estimate = record
            .size_estimate
            .or_else(|| size_field.and_then(|f| record.fields.get(f).copied()));

        let mut transitions = record.transitions;
        // Stable: events sharing a timestamp keep their source order.
        transitions.sort_by_key(|t| t.timestamp);

        WorkItemSnapshot {
            key: record.key,
            item_type: record.item_type,
            assignee: record.assignee,
            created_at: record.created_at,
            current_category: classification.category,
            current_status_name,
            current_method: classification.method,
            resolved_at: record.resolved_at,
            updated_at: record.updated_at,
            size_estimate,
            transitions,
        }
    }

    /// All history events in ascending time order.
    pub fn transitions(&self) -> &[TransitionEvent] {
        &self.transitions
    }

    /// Status changes only, in ascending time order.
    pub fn status_transitions(&self) -> impl Iterator<Item = &TransitionEvent> {
        self.transitions.iter().filter(|t| t.is_status())
    }

    /// Returns true if the item has at least one recorded status change.
    pub fn has_status_history(&self) -> bool {
        self.status_transitions().next().is_some()
    }

    /// Latest known activity: last update, else last transition, else creation.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.updated_at
            .or_else(|| self.transitions.last().map(|t| t.timestamp))
            .unwrap_or(self.created_at)
    }
}

/// A timeboxed iteration as described by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl IterationSummary {
    /// Returns the `[start, end]` window when both bounds are known.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// A closed iteration together with the items fetched for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedIteration {
    pub summary: IterationSummary,
    /// `None` when fetching the iteration's items failed.
    pub items: Option<Vec<WorkItemSnapshot>>,
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
