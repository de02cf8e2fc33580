// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn sample_table() -> StatusTable {
    StatusTable::from_entries([
        StatusEntry::new("1", "To Do", CanonicalCategory::NotStarted),
        StatusEntry::new("3", "In Progress", CanonicalCategory::Active),
        StatusEntry::new("10001", "Done", CanonicalCategory::Done),
    ])
}

#[parameterized(
    plain = { "Done", "done" },
    padded = { "  In Progress ", "in progress" },
    inner_whitespace = { "In \t  Review", "in review" },
    empty = { "", "" },
)]
fn normalize_name_cases(input: &str, expected: &str) {
    assert_eq!(normalize_name(input), expected);
}

#[test]
fn lookup_by_id_and_name() {
    let table = sample_table();
    assert_eq!(
        table.project().by_id("3").unwrap().category,
        CanonicalCategory::Active
    );
    assert_eq!(table.project().by_name("IN PROGRESS").unwrap().id, "3");
    assert!(table.project().by_id("In Progress").is_none());
}

#[test]
fn scoped_entries_register_project_wide_when_absent() {
    let mut table = sample_table();
    table.insert_scoped(
        "Bug",
        StatusEntry::new("20", "Triaged", CanonicalCategory::Active),
    );

    assert!(table.scope_for("bug").is_some());
    assert!(table.scope_for("Story").is_none());
    assert_eq!(table.project().by_id("20").unwrap().display_name, "Triaged");
}

#[test]
fn scoped_entries_do_not_override_project_wide() {
    let mut table = sample_table();
    table.insert_scoped(
        "Bug",
        StatusEntry::new("3", "In Progress", CanonicalCategory::NotStarted),
    );

    assert_eq!(
        table.project().by_id("3").unwrap().category,
        CanonicalCategory::Active
    );
    assert_eq!(
        table.scope_for("Bug").unwrap().by_id("3").unwrap().category,
        CanonicalCategory::NotStarted
    );
}

#[test]
fn ids_in_category_are_sorted() {
    let mut table = sample_table();
    table.insert(StatusEntry::new("2", "Review", CanonicalCategory::Active));
    assert_eq!(table.ids_in(CanonicalCategory::Active), vec!["2", "3"]);
    assert_eq!(table.ids_in(CanonicalCategory::Done), vec!["10001"]);
}

#[test]
fn empty_table() {
    let table = StatusTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.entries().is_empty());
}
