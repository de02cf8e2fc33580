// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `flowlens report` JSON output.

use chrono::{DateTime, Utc};
use fl_core::TelemetryResult;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{Category, EstimationMode, Health, MetricJson, ProjectKind, TrackingStrategy};

/// JSON output structure for the report command.
#[derive(JsonSchema, Serialize, Debug, Clone, PartialEq)]
pub struct ReportJson {
    /// Normalized project key.
    pub project_key: String,
    /// Instant the report was computed for.
    pub generated_at: DateTime<Utc>,
    /// Overall delivery health.
    pub health: Health,
    /// Project structure the metrics were gated by.
    pub context: ContextJson,
    /// Every metric, keyed by name. Inapplicable metrics have a null value
    /// and the `not-applicable` explanation code.
    pub metrics: BTreeMap<String, MetricJson>,
    /// Current item counts per flow category.
    pub flow_distribution: BTreeMap<String, usize>,
    /// Per-item drill-down; present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemJson>>,
    /// True when board data could not be read and the report is empty.
    pub data_unavailable: bool,
}

/// Resolved project structure.
#[derive(JsonSchema, Serialize, Debug, Clone, PartialEq)]
pub struct ContextJson {
    pub tracking_strategy: TrackingStrategy,
    pub project_kind: ProjectKind,
    pub estimation_mode: EstimationMode,
    /// Field holding size estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_field: Option<String>,
    /// Status ids that mean work has started.
    pub start_statuses: Vec<String>,
    /// Status ids that mean work is finished.
    pub done_statuses: Vec<String>,
    /// Metrics withheld for this structure.
    pub hidden_metrics: Vec<String>,
    /// Lookups that failed and fell back to defaults.
    pub degraded: Vec<String>,
}

/// One current item.
#[derive(JsonSchema, Serialize, Debug, Clone, PartialEq)]
pub struct ItemJson {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Flow category derived from the item type.
    pub flow_category: String,
    pub category: Category,
    pub status_name: String,
    /// How the status was classified (e.g. `exact-id`, `heuristic`).
    pub classification: String,
    /// Hours spent active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_hours: Option<f64>,
    /// How active time was measured (`changelog` or `lead-time-fallback`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_method: Option<String>,
}

impl ReportJson {
    pub fn new(result: &TelemetryResult, with_items: bool) -> Self {
        let ctx = &result.context;
        ReportJson {
            project_key: result.project_key.to_string(),
            generated_at: result.generated_at,
            health: result.health.into(),
            context: ContextJson {
                tracking_strategy: ctx.tracking_strategy.into(),
                project_kind: ctx.project_kind.into(),
                estimation_mode: ctx.estimation_mode.into(),
                size_field: ctx.size_field.clone(),
                start_statuses: ctx.start_statuses.clone(),
                done_statuses: ctx.done_statuses.clone(),
                hidden_metrics: ctx
                    .metric_validity
                    .hidden()
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
                degraded: ctx
                    .degraded
                    .iter()
                    .map(|d| d.to_string())
                    .collect(),
            },
            metrics: result
                .metrics
                .iter()
                .map(|(metric, value)| (metric.to_string(), MetricJson::from(value)))
                .collect(),
            flow_distribution: result
                .flow_distribution
                .iter()
                .map(|(category, count)| (category.to_string(), *count))
                .collect(),
            items: with_items.then(|| {
                result
                    .items
                    .iter()
                    .map(|item| ItemJson {
                        key: item.key.clone(),
                        item_type: item.item_type.clone(),
                        flow_category: item.flow_category.to_string(),
                        category: item.category.into(),
                        status_name: item.status_name.clone(),
                        classification: item.method.to_string(),
                        active_hours: item.active_hours,
                        active_method: item.active_method.map(|m| m.to_string()),
                    })
                    .collect()
            }),
            data_unavailable: result.data_unavailable,
        }
    }
}
