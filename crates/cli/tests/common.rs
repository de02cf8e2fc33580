// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use serde_json::{json, Value};
pub use tempfile::TempDir;

/// Instant every report test is evaluated at.
pub const NOW: &str = "2026-01-07T00:00:00Z";

/// The CLI with colors off and no ambient config or log overrides.
pub fn flowlens() -> Command {
    let mut cmd = cargo_bin_cmd!("flowlens");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("FLOWLENS_CONFIG")
        .env_remove("FLOWLENS_LOG")
        .env_remove("RUST_LOG")
        // Keep the default config lookup away from the real user directory.
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("flowlens-tests-none"))
        .env("HOME", std::env::temp_dir().join("flowlens-tests-none"));
    cmd
}

/// A small scrum board: one active, one done and one waiting item, sized
/// 3, 5 and 2 points, with two closed sprints.
pub fn scrum_board() -> Value {
    json!({
        "project": { "key": "FLOW", "kind": "structured_work" },
        "board": { "board_type": "scrum", "estimation_field": "customfield_10016" },
        "fields": [{ "id": "customfield_10016", "name": "Story Points" }],
        "statuses": [
            { "id": "1", "display_name": "To Do", "category": "not_started" },
            { "id": "3", "display_name": "In Progress", "category": "active" },
            { "id": "10001", "display_name": "Done", "category": "done" }
        ],
        "current_items": [
            { "key": "FL-1", "item_type": "Story", "created_at": "2026-01-01T00:00:00Z",
              "status": "3", "updated_at": "2026-01-06T00:00:00Z",
              "fields": { "customfield_10016": 3.0 },
              "transitions": [
                  { "timestamp": "2026-01-02T00:00:00Z", "field": "status", "from": "1", "to": "3" }
              ] },
            { "key": "FL-2", "item_type": "Bug", "created_at": "2026-01-01T00:00:00Z",
              "status": "10001", "resolved_at": "2026-01-04T00:00:00Z",
              "fields": { "customfield_10016": 5.0 } },
            { "key": "FL-3", "item_type": "Task", "created_at": "2026-01-03T00:00:00Z",
              "status": "1", "fields": { "customfield_10016": 2.0 } }
        ],
        "closed_iterations": [
            { "id": "7", "name": "Sprint 7",
              "start": "2025-12-08T00:00:00Z", "end": "2025-12-22T00:00:00Z",
              "items": [
                  { "key": "FL-10", "created_at": "2025-12-01T00:00:00Z", "status": "10001",
                    "resolved_at": "2025-12-10T00:00:00Z", "fields": { "customfield_10016": 8.0 } }
              ] },
            { "id": "8", "name": "Sprint 8",
              "start": "2025-12-22T00:00:00Z", "end": "2026-01-05T00:00:00Z",
              "items": [
                  { "key": "FL-11", "created_at": "2025-12-01T00:00:00Z", "status": "10001",
                    "resolved_at": "2025-12-23T00:00:00Z", "fields": { "customfield_10016": 4.0 } }
              ] }
        ],
        "active_iteration": { "id": "9", "name": "Sprint 9",
            "start": "2026-01-05T00:00:00Z", "end": "2026-01-19T00:00:00Z" }
    })
}

/// Writes `board` into `dir` and returns its path.
pub fn write_board(dir: &TempDir, board: &Value) -> PathBuf {
    let path = dir.path().join("board.json");
    std::fs::write(&path, serde_json::to_string_pretty(board).unwrap()).unwrap();
    path
}

/// Runs `flowlens report <board> --now NOW -o json` and parses the output.
pub fn report_json(dir: &TempDir, board: &Value, extra: &[&str]) -> Value {
    let path = write_board(dir, board);
    let output = flowlens()
        .arg("report")
        .arg(&path)
        .args(["--now", NOW, "-o", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
