// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator interfaces the engine reads project data through.
//!
//! Implementations talk to a tracker, a file export or a test double. Every
//! method may fail with a [`SourceError`]; callers degrade instead of
//! propagating it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TelemetryConfig;
use crate::context::{ProjectKey, ProjectKind, TrackingStrategy};
use crate::error::SourceError;
use crate::item::{ItemRecord, IterationSummary};
use crate::status::StatusTable;

/// Result type for collaborator calls.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Board type as configured in the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    Scrum,
    Kanban,
}

impl BoardType {
    pub fn tracking_strategy(&self) -> TrackingStrategy {
        match self {
            BoardType::Scrum => TrackingStrategy::Timeboxed,
            BoardType::Kanban => TrackingStrategy::Continuous,
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardType::Scrum => write!(f, "scrum"),
            BoardType::Kanban => write!(f, "kanban"),
        }
    }
}

/// A project's board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub board_type: BoardType,
    /// Field the board estimates with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimation_field: Option<String>,
}

/// A custom field offered by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub id: String,
    pub name: String,
}

/// Raw board contents for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardRecords {
    /// Items on the board now, or in the active iteration.
    #[serde(default)]
    pub current_items: Vec<ItemRecord>,
    /// Items with change history for reconstruction.
    #[serde(default)]
    pub historical_items: Vec<ItemRecord>,
    /// Recently closed iterations, most recent first.
    #[serde(default)]
    pub closed_iterations: Vec<IterationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_iteration: Option<IterationSummary>,
}

/// Supplies work items.
#[async_trait]
pub trait ItemDataSource: Send + Sync {
    /// Current and historical items plus iteration metadata.
    async fn board_data(
        &self,
        project: &ProjectKey,
        config: &TelemetryConfig,
    ) -> SourceResult<BoardRecords>;

    /// Items that belonged to one closed iteration.
    async fn iteration_items(
        &self,
        project: &ProjectKey,
        iteration_id: &str,
    ) -> SourceResult<Vec<ItemRecord>>;
}

/// Supplies a project's status vocabulary.
#[async_trait]
pub trait StatusTableSource: Send + Sync {
    async fn project_status_table(&self, project: &ProjectKey) -> SourceResult<StatusTable>;
}

/// Supplies structural project metadata.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    async fn project_kind(&self, project: &ProjectKey) -> SourceResult<ProjectKind>;

    /// `Ok(None)` means the project has no board.
    async fn board_config(&self, project: &ProjectKey) -> SourceResult<Option<BoardConfig>>;

    async fn fields(&self, project: &ProjectKey) -> SourceResult<Vec<FieldInfo>>;
}
