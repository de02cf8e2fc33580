// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::*;

#[test]
fn short_window_reports_raw_count() {
    let historical = vec![done_item("FL-1", 0, 2), done_item("FL-2", 0, 26)];
    let got = throughput(&historical);
    assert_eq!(got.value, Some(2.0));
    assert_eq!(got.explanation_code, "window-too-short-for-rate");
}

#[test]
fn same_instant_window_is_floored_to_one_day() {
    let historical = vec![done_item("FL-1", 0, 5), done_item("FL-2", 0, 5)];
    let got = throughput(&historical);
    assert_eq!(got.value, Some(2.0));
    assert_eq!(got.explanation_code, "window-too-short-for-rate");
}

#[test]
fn long_window_normalizes_to_weeks() {
    // 6 items over 14 days.
    let historical: Vec<_> = (0..6)
        .map(|n| done_item(&format!("FL-{n}"), 0, 1 + n * 24 * 14 / 5))
        .collect();
    let got = throughput(&historical);
    assert_eq!(got.value, Some(3.0));
    assert_eq!(got.explanation_code, "items-per-week");
}

#[test]
fn ignores_unfinished_items() {
    let historical = vec![active_item("FL-1", 1), snapshot(record("FL-2", t0(), "1"))];
    let got = throughput(&historical);
    assert_eq!(got.value, Some(0.0));
    assert_eq!(got.explanation_code, "no-completed-items");
}

#[test]
fn window_names_resolution_dates() {
    let historical = vec![done_item("FL-1", 0, 2), done_item("FL-2", 0, 24 * 9)];
    let got = throughput(&historical);
    assert_eq!(got.source_window, "2026-01-05..2026-01-14");
}

#[test]
fn guessed_done_statuses_are_flagged() {
    let historical = vec![shipped_item("FL-1", 1, 5), shipped_item("FL-2", 1, 30)];
    let got = throughput(&historical);
    assert_eq!(got.value, Some(2.0));
    assert_eq!(got.explanation_code, "window-too-short-for-rate+heuristic");
    assert!(got.has_flag("heuristic"));
}
