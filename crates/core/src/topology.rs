// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builds a project's [`StructuralContext`] from its collaborators.

use futures_util::join;
use std::sync::Arc;

use crate::cache::TopologyCache;
use crate::config::TelemetryConfig;
use crate::context::{DegradedLookup, ProjectKey, ProjectKind, StructuralContext, TrackingStrategy};
use crate::error::SourceError;
use crate::source::{BoardConfig, BoardType, FieldInfo, ProjectSource, StatusTableSource};
use crate::status::{normalize_name, StatusTable};

/// Resolves project structure, reusing cached status tables and size fields.
///
/// Each lookup degrades on its own: a failed fetch is replaced by its
/// conservative default, logged, recorded on the context and never cached.
#[derive(Clone)]
pub struct WorkflowTopologyBuilder {
    projects: Arc<dyn ProjectSource>,
    statuses: Arc<dyn StatusTableSource>,
    cache: Arc<TopologyCache>,
    size_field_candidates: Vec<String>,
}

impl WorkflowTopologyBuilder {
    pub fn new(
        projects: Arc<dyn ProjectSource>,
        statuses: Arc<dyn StatusTableSource>,
        cache: Arc<TopologyCache>,
        config: &TelemetryConfig,
    ) -> Self {
        WorkflowTopologyBuilder {
            projects,
            statuses,
            cache,
            size_field_candidates: config.size_field_candidates.clone(),
        }
    }

    /// Resolves the structural context for `project`. Never fails.
    pub async fn build(&self, project: &ProjectKey) -> StructuralContext {
        let (kind, board, table) = join!(
            self.projects.project_kind(project),
            self.projects.board_config(project),
            self.status_table(project),
        );

        let mut degraded = Vec::new();

        let project_kind = kind.unwrap_or_else(|e| {
            degrade(project, DegradedLookup::ProjectKind, &e, &mut degraded);
            ProjectKind::StructuredWork
        });

        let board = board.unwrap_or_else(|e| {
            degrade(project, DegradedLookup::BoardConfig, &e, &mut degraded);
            Some(BoardConfig {
                board_type: BoardType::Scrum,
                estimation_field: None,
            })
        });
        let tracking_strategy = board
            .as_ref()
            .map_or(TrackingStrategy::None, |b| b.board_type.tracking_strategy());

        let status_table = table.unwrap_or_else(|e| {
            degrade(project, DegradedLookup::StatusTable, &e, &mut degraded);
            StatusTable::new()
        });

        let estimation_field = board.and_then(|b| b.estimation_field);
        let size_field = match estimation_field {
            Some(field) => Some(field),
            None => self.size_field(project).await.unwrap_or_else(|e| {
                degrade(project, DegradedLookup::SizeField, &e, &mut degraded);
                None
            }),
        };

        let mut context = StructuralContext::new(
            project.clone(),
            project_kind,
            tracking_strategy,
            size_field,
            status_table,
        );
        context.degraded = degraded;

        tracing::debug!(
            project = %project,
            kind = %context.project_kind,
            strategy = %context.tracking_strategy,
            mode = %context.estimation_mode,
            statuses = context.status_table.len(),
            degraded = context.degraded.len(),
            "resolved project structure"
        );
        context
    }

    async fn status_table(&self, project: &ProjectKey) -> Result<StatusTable, SourceError> {
        if let Some(table) = self.cache.status_tables.get(project.as_str()) {
            return Ok(table);
        }
        let table = self.statuses.project_status_table(project).await?;
        self.cache
            .status_tables
            .insert(project.as_str(), table.clone());
        Ok(table)
    }

    async fn size_field(&self, project: &ProjectKey) -> Result<Option<String>, SourceError> {
        if let Some(field) = self.cache.size_fields.get(project.as_str()) {
            return Ok(field);
        }
        let fields = self.projects.fields(project).await?;
        let field = discover_size_field(&fields, &self.size_field_candidates);
        self.cache
            .size_fields
            .insert(project.as_str(), field.clone());
        Ok(field)
    }
}

fn degrade(
    project: &ProjectKey,
    lookup: DegradedLookup,
    error: &SourceError,
    degraded: &mut Vec<DegradedLookup>,
) {
    tracing::warn!(
        project = %project,
        lookup = %lookup,
        "lookup failed, using conservative default: {error}"
    );
    degraded.push(lookup);
}

/// Picks the first candidate name that matches a field, by candidate order.
/// Names compare case- and whitespace-insensitively.
pub fn discover_size_field(fields: &[FieldInfo], candidates: &[String]) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        let wanted = normalize_name(candidate);
        fields
            .iter()
            .find(|f| normalize_name(&f.name) == wanted)
            .map(|f| f.id.clone())
    })
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod tests;
