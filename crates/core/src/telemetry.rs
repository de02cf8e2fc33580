// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request orchestration: one telemetry report per project.
//!
//! The engine resolves structure, pulls board data, replays history,
//! computes every metric and gates the result. Upstream failures only ever
//! degrade the report; the sole error is a malformed project key.

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cache::TopologyCache;
use crate::category::CanonicalCategory;
use crate::classify::ClassificationMethod;
use crate::clock::ClockSource;
use crate::config::TelemetryConfig;
use crate::context::{ProjectKey, StructuralContext, TrackingStrategy};
use crate::error::Result;
use crate::flow::{flow_category, flow_distribution, FlowCategory};
use crate::item::{ClosedIteration, ItemRecord, IterationSummary, WorkItemSnapshot};
use crate::metrics::{self, AggregationInput, HealthLevel, MetricResult};
use crate::reconstruct::{active_duration, DurationMethod};
use crate::source::{BoardRecords, ItemDataSource, ProjectSource, StatusTableSource};
use crate::status::StatusTable;
use crate::topology::WorkflowTopologyBuilder;
use crate::validity::{gate, Metric};

/// A telemetry request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRequest {
    /// Raw project key as supplied by the caller.
    pub project_key: String,
}

impl TelemetryRequest {
    pub fn new(project_key: impl Into<String>) -> Self {
        TelemetryRequest {
            project_key: project_key.into(),
        }
    }
}

/// Per-item drill-down row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedItem {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub flow_category: FlowCategory,
    pub category: CanonicalCategory,
    pub status_name: String,
    pub method: ClassificationMethod,
    /// Hours spent active, when measurable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_method: Option<DurationMethod>,
}

impl CategorizedItem {
    fn from_snapshot(item: &WorkItemSnapshot, table: &StatusTable) -> Self {
        let active = active_duration(item, table);
        CategorizedItem {
            key: item.key.clone(),
            item_type: item.item_type.clone(),
            flow_category: flow_category(item.item_type.as_deref()),
            category: item.current_category,
            status_name: item.current_status_name.clone(),
            method: item.current_method,
            active_hours: active.map(|a| metrics::round1(a.hours())),
            active_method: active.map(|a| a.method),
        }
    }
}

/// The gated report for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryResult {
    pub project_key: ProjectKey,
    pub generated_at: DateTime<Utc>,
    pub context: StructuralContext,
    pub metrics: BTreeMap<Metric, MetricResult>,
    pub health: HealthLevel,
    pub flow_distribution: BTreeMap<FlowCategory, usize>,
    pub items: Vec<CategorizedItem>,
    /// True when board data could not be fetched and the report is empty.
    pub data_unavailable: bool,
}

impl TelemetryResult {
    pub fn metric(&self, metric: Metric) -> Option<&MetricResult> {
        self.metrics.get(&metric)
    }
}

/// Produces telemetry reports from a set of collaborators.
pub struct TelemetryEngine {
    items: Arc<dyn ItemDataSource>,
    topology: WorkflowTopologyBuilder,
    config: TelemetryConfig,
    clock: Arc<dyn ClockSource>,
}

impl TelemetryEngine {
    /// Creates an engine with its own topology cache.
    pub fn new(
        items: Arc<dyn ItemDataSource>,
        projects: Arc<dyn ProjectSource>,
        statuses: Arc<dyn StatusTableSource>,
        config: TelemetryConfig,
        clock: Arc<dyn ClockSource>,
    ) -> Self {
        let cache = Arc::new(TopologyCache::new(clock.clone(), config.cache_ttl()));
        Self::with_cache(items, projects, statuses, config, clock, cache)
    }

    /// Creates an engine sharing `cache` with other engines.
    pub fn with_cache(
        items: Arc<dyn ItemDataSource>,
        projects: Arc<dyn ProjectSource>,
        statuses: Arc<dyn StatusTableSource>,
        config: TelemetryConfig,
        clock: Arc<dyn ClockSource>,
        cache: Arc<TopologyCache>,
    ) -> Self {
        let topology = WorkflowTopologyBuilder::new(projects, statuses, cache, &config);
        TelemetryEngine {
            items,
            topology,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    /// Builds the report for `request`.
    pub async fn run(&self, request: &TelemetryRequest) -> Result<TelemetryResult> {
        let project = ProjectKey::parse(&request.project_key)?;
        let now = self.clock.now();
        let context = self.topology.build(&project).await;

        let (board, data_unavailable) = match self.items.board_data(&project, &self.config).await {
            Ok(board) => (board, false),
            Err(e) => {
                tracing::warn!(project = %project, "board data unavailable: {e}");
                (BoardRecords::default(), true)
            }
        };
        let BoardRecords {
            current_items,
            historical_items,
            closed_iterations,
            active_iteration,
        } = board;

        let current = snapshots(current_items, &context);
        let mut historical = snapshots(historical_items, &context);
        if historical.is_empty() && self.config.include_board_items_when_empty {
            historical = current.clone();
        }

        let closed = if context.tracking_strategy == TrackingStrategy::Timeboxed {
            self.closed_iterations(&project, closed_iterations, &context)
                .await
        } else {
            Vec::new()
        };

        let input = AggregationInput {
            current: &current,
            historical: &historical,
            closed_iterations: &closed,
            active_iteration: active_iteration.as_ref(),
        };
        let raw = metrics::compute(&input, &context, &self.config, now);
        let gated = gate(raw, &context);

        let health = gated
            .get(&Metric::HealthStatus)
            .and_then(|r| r.value)
            .and_then(HealthLevel::from_ordinal)
            .unwrap_or(HealthLevel::Optimal);
        let items = current
            .iter()
            .map(|item| CategorizedItem::from_snapshot(item, &context.status_table))
            .collect();

        tracing::info!(
            project = %project,
            strategy = %context.tracking_strategy,
            current = current.len(),
            historical = historical.len(),
            closed_iterations = closed.len(),
            health = %health,
            data_unavailable,
            "telemetry computed"
        );

        Ok(TelemetryResult {
            project_key: project,
            generated_at: now,
            flow_distribution: flow_distribution(&current),
            context,
            metrics: gated,
            health,
            items,
            data_unavailable,
        })
    }

    /// Fetches every closed iteration's items concurrently. A failed fetch
    /// leaves that iteration without items.
    async fn closed_iterations(
        &self,
        project: &ProjectKey,
        summaries: Vec<IterationSummary>,
        context: &StructuralContext,
    ) -> Vec<ClosedIteration> {
        let fetches = summaries
            .iter()
            .map(|summary| self.items.iteration_items(project, &summary.id));
        let fetched = join_all(fetches).await;

        summaries
            .into_iter()
            .zip(fetched)
            .map(|(summary, result)| {
                let items = match result {
                    Ok(records) => Some(snapshots(records, context)),
                    Err(e) => {
                        tracing::warn!(
                            project = %project,
                            iteration = %summary.id,
                            "iteration items unavailable: {e}"
                        );
                        None
                    }
                };
                ClosedIteration { summary, items }
            })
            .collect()
    }
}

fn snapshots(records: Vec<ItemRecord>, context: &StructuralContext) -> Vec<WorkItemSnapshot> {
    let size_field = context.size_field.as_deref();
    records
        .into_iter()
        .map(|r| WorkItemSnapshot::from_record(r, &context.status_table, size_field))
        .collect()
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
