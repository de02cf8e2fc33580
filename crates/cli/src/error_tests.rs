// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_core_errors_pass_through() {
    let core = fl_core::ProjectKey::parse("9x").unwrap_err();
    let err = Error::from(core);
    let msg = err.to_string();
    assert!(msg.starts_with("invalid project key: '9x'"));
    assert!(msg.contains("hint:"));
}

#[test]
fn test_board_not_found_display() {
    let err = Error::BoardNotFound(PathBuf::from("/tmp/nope.json"));
    let msg = err.to_string();
    assert!(msg.contains("board file not found"));
    assert!(msg.contains("/tmp/nope.json"));
}

#[test]
fn test_board_parse_display() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::BoardParse {
        path: PathBuf::from("board.json"),
        source,
    };
    assert!(err.to_string().starts_with("cannot read board file board.json:"));
}

#[test]
fn test_invalid_timestamp_display() {
    let err = Error::InvalidTimestamp("yesterday".to_string());
    let msg = err.to_string();
    assert!(msg.contains("'yesterday'"));
    assert!(msg.contains("RFC 3339"));
}

#[test]
fn test_missing_project_key_hint() {
    assert!(Error::MissingProjectKey.to_string().contains("--project"));
}
