// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed data source.
//!
//! A board export is a single JSON document carrying everything the engine
//! would otherwise ask a tracker for. Sections that are missing from the
//! file behave like failed upstream lookups, so partial exports exercise the
//! same degradation paths as a flaky tracker.

use async_trait::async_trait;
use fl_core::source::SourceResult;
use fl_core::{
    BoardConfig, BoardRecords, FieldInfo, ItemDataSource, ItemRecord, IterationSummary,
    ProjectKey, ProjectKind, ProjectSource, SourceError, StatusEntry, StatusTable,
    StatusTableSource, TelemetryConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Project header of a board export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ProjectKind>,
}

/// Board section. `configured: false` means the project has no board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardExport {
    Configured(BoardConfig),
    Unconfigured {
        #[serde(deserialize_with = "require_false")]
        configured: bool,
    },
}

fn require_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let configured = bool::deserialize(deserializer)?;
    if configured {
        return Err(serde::de::Error::custom(
            "a board without `board_type` must set `configured: false`",
        ));
    }
    Ok(configured)
}

/// A closed iteration with its items. Missing items behave like a failed
/// fetch for that iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedIterationExport {
    #[serde(flatten)]
    pub summary: IterationSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemRecord>>,
}

/// The full board export document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFile {
    #[serde(default)]
    pub project: ProjectExport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<StatusEntry>>,
    /// Workflows specific to one item type, keyed by type name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub type_statuses: BTreeMap<String, Vec<StatusEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_items: Option<Vec<ItemRecord>>,
    #[serde(default)]
    pub historical_items: Vec<ItemRecord>,
    #[serde(default)]
    pub closed_iterations: Vec<ClosedIterationExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_iteration: Option<IterationSummary>,
}

impl BoardFile {
    /// Reads and parses a board export.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::BoardNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| Error::BoardParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serves every collaborator interface from one [`BoardFile`].
#[derive(Debug, Clone)]
pub struct FileSource {
    file: BoardFile,
}

impl FileSource {
    pub fn new(file: BoardFile) -> Self {
        FileSource { file }
    }

    /// Project key declared in the export, if any.
    pub fn project_key(&self) -> Option<&str> {
        self.file.project.key.as_deref()
    }

    fn missing(section: &str) -> SourceError {
        SourceError::NotFound(format!("board file has no '{section}' section"))
    }
}

#[async_trait]
impl ItemDataSource for FileSource {
    async fn board_data(
        &self,
        _project: &ProjectKey,
        _config: &TelemetryConfig,
    ) -> SourceResult<BoardRecords> {
        let current_items = self
            .file
            .current_items
            .clone()
            .ok_or_else(|| Self::missing("current_items"))?;
        Ok(BoardRecords {
            current_items,
            historical_items: self.file.historical_items.clone(),
            closed_iterations: self
                .file
                .closed_iterations
                .iter()
                .map(|c| c.summary.clone())
                .collect(),
            active_iteration: self.file.active_iteration.clone(),
        })
    }

    async fn iteration_items(
        &self,
        _project: &ProjectKey,
        iteration_id: &str,
    ) -> SourceResult<Vec<ItemRecord>> {
        self.file
            .closed_iterations
            .iter()
            .find(|c| c.summary.id == iteration_id)
            .and_then(|c| c.items.clone())
            .ok_or_else(|| SourceError::NotFound(format!("items of iteration {iteration_id}")))
    }
}

#[async_trait]
impl StatusTableSource for FileSource {
    async fn project_status_table(&self, _project: &ProjectKey) -> SourceResult<StatusTable> {
        let entries = self
            .file
            .statuses
            .clone()
            .ok_or_else(|| Self::missing("statuses"))?;
        let mut table = StatusTable::from_entries(entries);
        for (item_type, entries) in &self.file.type_statuses {
            for entry in entries {
                table.insert_scoped(item_type, entry.clone());
            }
        }
        Ok(table)
    }
}

#[async_trait]
impl ProjectSource for FileSource {
    async fn project_kind(&self, _project: &ProjectKey) -> SourceResult<ProjectKind> {
        self.file
            .project
            .kind
            .ok_or_else(|| Self::missing("project.kind"))
    }

    async fn board_config(&self, _project: &ProjectKey) -> SourceResult<Option<BoardConfig>> {
        match &self.file.board {
            Some(BoardExport::Configured(config)) => Ok(Some(config.clone())),
            Some(BoardExport::Unconfigured { .. }) => Ok(None),
            None => Err(Self::missing("board")),
        }
    }

    async fn fields(&self, _project: &ProjectKey) -> SourceResult<Vec<FieldInfo>> {
        self.file
            .fields
            .clone()
            .ok_or_else(|| Self::missing("fields"))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
