// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use fl_core::{BoardType, CanonicalCategory};
use serde_json::json;
use tempfile::TempDir;

fn key() -> ProjectKey {
    ProjectKey::parse("FLOW").unwrap()
}

fn sample() -> BoardFile {
    serde_json::from_value(json!({
        "project": { "key": "FLOW", "kind": "structured_work" },
        "board": { "board_type": "scrum", "estimation_field": "customfield_10016" },
        "fields": [{ "id": "customfield_10016", "name": "Story Points" }],
        "statuses": [
            { "id": "1", "display_name": "To Do", "category": "not_started" },
            { "id": "3", "display_name": "In Progress", "category": "active" },
            { "id": "10001", "display_name": "Done", "category": "done" }
        ],
        "type_statuses": {
            "Bug": [{ "id": "20", "display_name": "Triaged", "category": "active" }]
        },
        "current_items": [
            { "key": "FL-1", "created_at": "2026-01-05T10:00:00Z", "status": "3" }
        ],
        "closed_iterations": [
            { "id": "7", "name": "Sprint 7", "start": "2025-12-01T00:00:00Z",
              "end": "2025-12-15T00:00:00Z", "items": [] },
            { "id": "8", "name": "Sprint 8" }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn test_serves_project_structure() {
    let source = FileSource::new(sample());
    assert_eq!(source.project_key(), Some("FLOW"));
    assert_eq!(source.project_kind(&key()).await.unwrap(), ProjectKind::StructuredWork);

    let board = source.board_config(&key()).await.unwrap().unwrap();
    assert_eq!(board.board_type, BoardType::Scrum);
    assert_eq!(board.estimation_field.as_deref(), Some("customfield_10016"));
    assert_eq!(source.fields(&key()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_status_table_includes_type_scopes() {
    let source = FileSource::new(sample());
    let table = source.project_status_table(&key()).await.unwrap();
    assert_eq!(table.ids_in(CanonicalCategory::Done), vec!["10001".to_string()]);
    let bug = table.scope_for("Bug").unwrap();
    assert_eq!(bug.by_id("20").unwrap().category, CanonicalCategory::Active);
}

#[tokio::test]
async fn test_board_data_and_iteration_items() {
    let source = FileSource::new(sample());
    let board = source.board_data(&key(), &TelemetryConfig::default()).await.unwrap();
    assert_eq!(board.current_items.len(), 1);
    assert_eq!(board.closed_iterations.len(), 2);
    assert_eq!(board.closed_iterations[0].name, "Sprint 7");

    assert!(source.iteration_items(&key(), "7").await.unwrap().is_empty());
    let missing = source.iteration_items(&key(), "8").await.unwrap_err();
    assert!(matches!(missing, SourceError::NotFound(_)));
}

#[tokio::test]
async fn test_missing_sections_fail_like_upstream() {
    let source = FileSource::new(BoardFile::default());
    assert!(source.project_kind(&key()).await.is_err());
    assert!(source.board_config(&key()).await.is_err());
    assert!(source.fields(&key()).await.is_err());
    assert!(source.project_status_table(&key()).await.is_err());
    assert!(source
        .board_data(&key(), &TelemetryConfig::default())
        .await
        .is_err());
}

#[tokio::test]
async fn test_unconfigured_board_means_no_board() {
    let file: BoardFile = serde_json::from_value(json!({
        "board": { "configured": false }
    }))
    .unwrap();
    let source = FileSource::new(file);
    assert_eq!(source.board_config(&key()).await.unwrap(), None);
}

#[test]
fn test_board_section_rejects_configured_without_board_type() {
    let err = serde_json::from_value::<BoardExport>(json!({ "configured": true }));
    assert!(err.is_err());

    let board: BoardExport = serde_json::from_value(json!({ "configured": false })).unwrap();
    assert_eq!(board, BoardExport::Unconfigured { configured: false });
}

#[test]
fn test_load_reports_missing_and_malformed_files() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");
    assert!(matches!(BoardFile::load(&missing), Err(Error::BoardNotFound(_))));

    let bad = temp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(BoardFile::load(&bad), Err(Error::BoardParse { .. })));

    let good = temp.path().join("good.json");
    fs::write(&good, serde_json::to_string(&sample()).unwrap()).unwrap();
    assert_eq!(BoardFile::load(&good).unwrap(), sample());
}
