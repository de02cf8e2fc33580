// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    project_key = { Error::InvalidProjectKey("bad key".into()), "bad key" },
    category = { Error::InvalidCategory("maybe".into()), "not_started, active, done" },
    strategy = { Error::InvalidTrackingStrategy("agile".into()), "timeboxed" },
    kind = { Error::InvalidProjectKind("odd".into()), "structured_work" },
    metric = { Error::InvalidMetric("vibes".into()), "vibes" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[parameterized(
    not_found = { SourceError::NotFound("board 7".into()), "not found: board 7" },
    unavailable = { SourceError::Unavailable("503".into()), "upstream unavailable: 503" },
    malformed = { SourceError::Malformed("eof".into()), "malformed upstream payload: eof" },
)]
fn source_error_display(err: SourceError, expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn invalid_project_key_has_hint() {
    let msg = Error::InvalidProjectKey("".into()).to_string();
    assert!(msg.contains("hint:"));
}
