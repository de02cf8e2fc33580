// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::*;
use yare::parameterized;

fn config(wip_limit: i64) -> TelemetryConfig {
    TelemetryConfig {
        wip_limit,
        ..TelemetryConfig::default()
    }
}

/// Active since `start_day`, never resolved.
fn active_since_day(key: &str, start_day: i64) -> WorkItemSnapshot {
    let mut rec = record(key, t0(), "3");
    rec.transitions = vec![moved(at_d(start_day), "1", "3")];
    snapshot(rec)
}

#[test]
fn wip_load_without_limit_is_absent() {
    let current = vec![active_item("FL-1", 1)];
    let got = wip_load(&current, &config(0));
    assert_eq!(got.value, None);
    assert_eq!(got.explanation_code, "no-limit-configured");
}

#[test]
fn wip_load_is_percentage_of_limit() {
    let current = vec![
        active_item("FL-1", 1),
        active_item("FL-2", 1),
        active_item("FL-3", 1),
        done_item("FL-4", 1, 2),
        snapshot(record("FL-5", t0(), "1")),
    ];
    let got = wip_load(&current, &config(4));
    assert_eq!(got.value, Some(75.0));
    assert_eq!(got.explanation_code, "active-over-limit");
}

#[test]
fn wip_load_flags_heuristic_statuses() {
    let current = vec![snapshot(record("FL-1", t0(), "Doing"))];
    let got = wip_load(&current, &config(2));
    assert_eq!(got.value, Some(50.0));
    assert!(got.has_flag("heuristic"));
}

#[test]
fn wip_consistency_of_equal_samples_is_zero() {
    let current = vec![active_item("FL-1", 0), active_item("FL-2", 0)];
    let historical = current.clone();
    let got = wip_consistency(&current, &historical, &workflow(), at_d(30));
    assert_eq!(got.value, Some(0.0));
    assert_eq!(got.explanation_code, "mean=2");
}

#[test]
fn wip_consistency_without_any_wip() {
    let got = wip_consistency(&[], &[], &workflow(), at_d(30));
    assert_eq!(got.value, Some(0.0));
    assert_eq!(got.explanation_code, "wip-always-zero");
}

#[test]
fn wip_consistency_is_population_std_dev() {
    let current = vec![
        active_item("FL-1", 0),
        active_item("FL-2", 0),
        active_item("FL-3", 0),
        active_item("FL-4", 0),
    ];
    let historical = vec![active_since_day("FL-5", 10), active_since_day("FL-6", 10)];

    let samples = wip_samples(&current, &historical, &workflow(), at_d(30));
    assert_eq!(samples.counts, [4.0, 2.0, 2.0, 0.0]);

    let got = wip_consistency(&current, &historical, &workflow(), at_d(30));
    // sqrt((4 + 0 + 0 + 4) / 4)
    assert_eq!(got.value, Some(1.4));
    assert_eq!(got.explanation_code, "mean=2");
}

#[test]
fn wip_consistency_flags_lead_time_proxy() {
    let mut rec = record("FL-1", t0(), "10001");
    rec.resolved_at = Some(at_d(20));
    let historical = vec![snapshot(rec)];
    let got = wip_consistency(&[], &historical, &workflow(), at_d(30));
    assert!(got.has_flag("lead-time-proxy"));
}

#[test]
fn stalled_items_use_last_activity() {
    let mut fresh = record("FL-1", t0(), "3");
    fresh.transitions = vec![moved(at_h(1), "1", "3")];
    fresh.updated_at = Some(at_d(9));
    let current = vec![snapshot(fresh), active_item("FL-2", 1)];

    let got = stalled_items(&current, &TelemetryConfig::default(), at_d(10));
    assert_eq!(got.value, Some(1.0));
}

#[test]
fn stalled_items_without_threshold() {
    let config = TelemetryConfig {
        stalled_threshold_hours: 0.0,
        ..TelemetryConfig::default()
    };
    let got = stalled_items(&[], &config, at_d(1));
    assert_eq!(got.explanation_code, "no-threshold-configured");
}

#[test]
fn assignee_load_uses_busiest_assignee() {
    let assigned = |key: &str, who: &str| {
        let mut rec = record(key, t0(), "3");
        rec.assignee = Some(who.to_string());
        snapshot(rec)
    };
    let current = vec![
        assigned("FL-1", "ana"),
        assigned("FL-2", "ana"),
        assigned("FL-3", "ana"),
        assigned("FL-4", "bo"),
        active_item("FL-5", 1),
    ];
    let config = TelemetryConfig {
        assignee_capacity: 2,
        ..TelemetryConfig::default()
    };
    let got = assignee_load(&current, &config);
    assert_eq!(got.value, Some(150.0));
}

#[test]
fn assignee_load_without_assignments() {
    let config = TelemetryConfig {
        assignee_capacity: 2,
        ..TelemetryConfig::default()
    };
    let got = assignee_load(&[active_item("FL-1", 1)], &config);
    assert_eq!(got.value, Some(0.0));
    assert_eq!(got.explanation_code, "no-assigned-work");
}

#[test]
fn stalled_items_flag_heuristic_statuses() {
    let current = vec![snapshot(record("FL-1", t0(), "Doing")), active_item("FL-2", 1)];
    let got = stalled_items(&current, &TelemetryConfig::default(), at_d(10));
    assert_eq!(got.value, Some(2.0));
    assert_eq!(got.explanation_code, "inactive-over-threshold+heuristic");
}

#[parameterized(
    assigned = { Some("ana"), "max-per-assignee+heuristic" },
    unassigned = { None, "no-assigned-work+heuristic" },
)]
fn assignee_load_flags_heuristic_statuses(assignee: Option<&str>, code: &str) {
    let mut rec = record("FL-1", t0(), "Doing");
    rec.assignee = assignee.map(str::to_string);
    let config = TelemetryConfig {
        assignee_capacity: 2,
        ..TelemetryConfig::default()
    };
    let got = assignee_load(&[snapshot(rec)], &config);
    assert_eq!(got.explanation_code, code);
}
