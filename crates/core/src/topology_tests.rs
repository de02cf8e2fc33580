// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clock::ManualClock;
use crate::source::SourceResult;
use crate::testing::workflow;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
struct FakeProject {
    kind: Option<ProjectKind>,
    board: Option<Option<BoardConfig>>,
    fields: Option<Vec<FieldInfo>>,
    field_calls: AtomicUsize,
}

#[async_trait]
impl ProjectSource for FakeProject {
    async fn project_kind(&self, _: &ProjectKey) -> SourceResult<ProjectKind> {
        self.kind
            .ok_or_else(|| SourceError::Unavailable("project".into()))
    }

    async fn board_config(&self, _: &ProjectKey) -> SourceResult<Option<BoardConfig>> {
        self.board
            .clone()
            .ok_or_else(|| SourceError::Unavailable("board".into()))
    }

    async fn fields(&self, _: &ProjectKey) -> SourceResult<Vec<FieldInfo>> {
        self.field_calls.fetch_add(1, Ordering::SeqCst);
        self.fields
            .clone()
            .ok_or_else(|| SourceError::Unavailable("fields".into()))
    }
}

#[derive(Default)]
struct FakeStatuses {
    table: Option<StatusTable>,
    calls: AtomicUsize,
}

#[async_trait]
impl StatusTableSource for FakeStatuses {
    async fn project_status_table(&self, _: &ProjectKey) -> SourceResult<StatusTable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table
            .clone()
            .ok_or_else(|| SourceError::NotFound("statuses".into()))
    }
}

fn key() -> ProjectKey {
    ProjectKey::parse("FLOW").unwrap()
}

fn field(id: &str, name: &str) -> FieldInfo {
    FieldInfo {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn healthy_project(board: Option<BoardConfig>) -> FakeProject {
    FakeProject {
        kind: Some(ProjectKind::StructuredWork),
        board: Some(board),
        fields: Some(vec![
            field("summary", "Summary"),
            field("customfield_10016", "Story point estimate"),
        ]),
        ..FakeProject::default()
    }
}

fn healthy_statuses() -> FakeStatuses {
    FakeStatuses {
        table: Some(workflow()),
        ..FakeStatuses::default()
    }
}

struct Harness {
    projects: Arc<FakeProject>,
    statuses: Arc<FakeStatuses>,
    clock: Arc<ManualClock>,
    builder: WorkflowTopologyBuilder,
}

fn harness(projects: FakeProject, statuses: FakeStatuses) -> Harness {
    let projects = Arc::new(projects);
    let statuses = Arc::new(statuses);
    let clock = Arc::new(ManualClock::new(1_000));
    let cache = Arc::new(TopologyCache::new(clock.clone(), Duration::from_secs(300)));
    let builder = WorkflowTopologyBuilder::new(
        projects.clone(),
        statuses.clone(),
        cache,
        &TelemetryConfig::default(),
    );
    Harness {
        projects,
        statuses,
        clock,
        builder,
    }
}

fn scrum_board(estimation_field: Option<&str>) -> Option<BoardConfig> {
    Some(BoardConfig {
        board_type: BoardType::Scrum,
        estimation_field: estimation_field.map(str::to_string),
    })
}

#[tokio::test]
async fn scrum_board_with_estimation_field() {
    let h = harness(healthy_project(scrum_board(Some("customfield_99"))), healthy_statuses());
    let ctx = h.builder.build(&key()).await;

    assert_eq!(ctx.tracking_strategy, TrackingStrategy::Timeboxed);
    assert_eq!(ctx.size_field.as_deref(), Some("customfield_99"));
    assert!(!ctx.is_degraded());
    assert_eq!(ctx.done_statuses, vec!["10001".to_string()]);
    // The board field wins; discovery never runs.
    assert_eq!(h.projects.field_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn discovers_size_field_from_candidates() {
    let h = harness(healthy_project(scrum_board(None)), healthy_statuses());
    let ctx = h.builder.build(&key()).await;
    assert_eq!(ctx.size_field.as_deref(), Some("customfield_10016"));
    assert_eq!(ctx.estimation_mode, crate::context::EstimationMode::Size);
}

#[tokio::test]
async fn kanban_and_boardless_projects() {
    let kanban = harness(
        healthy_project(Some(BoardConfig {
            board_type: BoardType::Kanban,
            estimation_field: None,
        })),
        healthy_statuses(),
    );
    let ctx = kanban.builder.build(&key()).await;
    assert_eq!(ctx.tracking_strategy, TrackingStrategy::Continuous);
    assert!(!ctx.uses_iterations());

    let boardless = harness(healthy_project(None), healthy_statuses());
    let ctx = boardless.builder.build(&key()).await;
    assert_eq!(ctx.tracking_strategy, TrackingStrategy::None);
}

#[tokio::test]
async fn every_failure_degrades_to_conservative_context() {
    let h = harness(FakeProject::default(), FakeStatuses::default());
    let ctx = h.builder.build(&key()).await;
    let conservative = StructuralContext::conservative(key());

    assert_eq!(ctx.project_kind, conservative.project_kind);
    assert_eq!(ctx.tracking_strategy, conservative.tracking_strategy);
    assert_eq!(ctx.estimation_mode, conservative.estimation_mode);
    assert!(ctx.status_table.is_empty());
    assert_eq!(
        ctx.degraded,
        vec![
            DegradedLookup::ProjectKind,
            DegradedLookup::BoardConfig,
            DegradedLookup::StatusTable,
            DegradedLookup::SizeField,
        ]
    );
}

#[tokio::test]
async fn one_failure_does_not_taint_the_others() {
    let h = harness(healthy_project(scrum_board(None)), FakeStatuses::default());
    let ctx = h.builder.build(&key()).await;
    assert_eq!(ctx.degraded, vec![DegradedLookup::StatusTable]);
    assert_eq!(ctx.size_field.as_deref(), Some("customfield_10016"));
}

#[tokio::test]
async fn status_table_and_size_field_are_cached() {
    let h = harness(healthy_project(scrum_board(None)), healthy_statuses());
    let first = h.builder.build(&key()).await;
    let second = h.builder.build(&key()).await;

    assert_eq!(first, second);
    assert_eq!(h.statuses.calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.projects.field_calls.load(Ordering::SeqCst), 1);

    h.clock.advance_ms(301_000);
    h.builder.build(&key()).await;
    assert_eq!(h.statuses.calls.load(Ordering::SeqCst), 2);
    assert_eq!(h.projects.field_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn degraded_lookups_are_not_cached() {
    let h = harness(healthy_project(scrum_board(None)), FakeStatuses::default());
    h.builder.build(&key()).await;
    h.builder.build(&key()).await;
    assert_eq!(h.statuses.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn discovery_follows_candidate_order() {
    let fields = vec![
        field("cf_1", "Estimate"),
        field("cf_2", "story  POINTS"),
    ];
    let candidates = vec!["Story Points".to_string(), "Estimate".to_string()];
    assert_eq!(discover_size_field(&fields, &candidates).as_deref(), Some("cf_2"));
    assert_eq!(discover_size_field(&fields, &[]), None);
}
