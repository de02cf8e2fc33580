// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::category::CanonicalCategory;
use crate::context::{ProjectKey, ProjectKind, StructuralContext, TrackingStrategy};
use crate::item::{ItemRecord, TransitionEvent, WorkItemSnapshot};
use crate::status::{StatusEntry, StatusTable};

/// Fixed reference instant all fixtures are relative to.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap()
}

/// `t0` plus a number of hours.
pub fn at_h(hours: i64) -> DateTime<Utc> {
    t0() + Duration::hours(hours)
}

/// `t0` plus a number of days.
pub fn at_d(days: i64) -> DateTime<Utc> {
    t0() + Duration::days(days)
}

/// A small software workflow: To Do → In Progress → In Review → Done.
pub fn workflow() -> StatusTable {
    StatusTable::from_entries([
        StatusEntry::new("1", "To Do", CanonicalCategory::NotStarted),
        StatusEntry::new("3", "In Progress", CanonicalCategory::Active),
        StatusEntry::new("4", "In Review", CanonicalCategory::Active),
        StatusEntry::new("10001", "Done", CanonicalCategory::Done),
    ])
}

/// A record created at `created` currently in `status`.
pub fn record(key: &str, created: DateTime<Utc>, status: &str) -> ItemRecord {
    ItemRecord {
        key: key.to_string(),
        created_at: created,
        status: status.to_string(),
        ..ItemRecord::default()
    }
}

pub fn moved(at: DateTime<Utc>, from: &str, to: &str) -> TransitionEvent {
    TransitionEvent::status(at, Some(from), Some(to))
}

pub fn snapshot(record: ItemRecord) -> WorkItemSnapshot {
    WorkItemSnapshot::from_record(record, &workflow(), None)
}

/// An item that went To Do → In Progress at `start_h` and was resolved at
/// `done_h` (hours after `t0`).
pub fn done_item(key: &str, start_h: i64, done_h: i64) -> WorkItemSnapshot {
    let mut rec = record(key, t0(), "10001");
    rec.resolved_at = Some(at_h(done_h));
    rec.transitions = vec![
        moved(at_h(start_h), "1", "3"),
        moved(at_h(done_h), "3", "10001"),
    ];
    snapshot(rec)
}

/// An item currently in progress since `start_h`.
pub fn active_item(key: &str, start_h: i64) -> WorkItemSnapshot {
    let mut rec = record(key, t0(), "3");
    rec.transitions = vec![moved(at_h(start_h), "1", "3")];
    snapshot(rec)
}

/// A context for project `FLOW` over [`workflow`].
pub fn context(
    kind: ProjectKind,
    strategy: TrackingStrategy,
    size_field: Option<&str>,
) -> StructuralContext {
    StructuralContext::new(
        ProjectKey::parse("FLOW").unwrap(),
        kind,
        strategy,
        size_field.map(str::to_string),
        workflow(),
    )
}

/// Timeboxed software project estimating with story points.
pub fn scrum_context() -> StructuralContext {
    context(
        ProjectKind::StructuredWork,
        TrackingStrategy::Timeboxed,
        Some("customfield_10016"),
    )
}

/// A done item with a size estimate, resolved at `resolved`.
pub fn sized_done(key: &str, size: f64, resolved: DateTime<Utc>) -> WorkItemSnapshot {
    let mut rec = record(key, t0(), "10001");
    rec.size_estimate = Some(size);
    rec.resolved_at = Some(resolved);
    snapshot(rec)
}

/// An item resolved at `done_h` hours after `t0` in "Shipped", a status the
/// table does not know and that classifies as done by name.
pub fn shipped_item(key: &str, start_h: i64, done_h: i64) -> WorkItemSnapshot {
    let mut rec = record(key, t0(), "Shipped");
    rec.resolved_at = Some(at_h(done_h));
    rec.transitions = vec![
        moved(at_h(start_h), "1", "3"),
        moved(at_h(done_h), "3", "Shipped"),
    ];
    snapshot(rec)
}
