// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON output structures.
//!
//! These mirror the engine's result types so JSON output and its published
//! schema come from one definition, without adding a schemars dependency to
//! the engine. Shared enums live here; each command's top-level output type
//! lives in its own module.

use schemars::JsonSchema;
use serde::Serialize;

pub mod report;
pub mod validity;

/// Canonical workflow bucket.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NotStarted,
    Active,
    Done,
}

impl From<fl_core::CanonicalCategory> for Category {
    fn from(value: fl_core::CanonicalCategory) -> Self {
        match value {
            fl_core::CanonicalCategory::NotStarted => Category::NotStarted,
            fl_core::CanonicalCategory::Active => Category::Active,
            fl_core::CanonicalCategory::Done => Category::Done,
        }
    }
}

/// How a project organizes work over time.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStrategy {
    Timeboxed,
    Continuous,
    None,
}

impl From<fl_core::TrackingStrategy> for TrackingStrategy {
    fn from(value: fl_core::TrackingStrategy) -> Self {
        match value {
            fl_core::TrackingStrategy::Timeboxed => TrackingStrategy::Timeboxed,
            fl_core::TrackingStrategy::Continuous => TrackingStrategy::Continuous,
            fl_core::TrackingStrategy::None => TrackingStrategy::None,
        }
    }
}

/// Broad kind of project.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Generic,
    StructuredWork,
}

impl From<fl_core::ProjectKind> for ProjectKind {
    fn from(value: fl_core::ProjectKind) -> Self {
        match value {
            fl_core::ProjectKind::Generic => ProjectKind::Generic,
            fl_core::ProjectKind::StructuredWork => ProjectKind::StructuredWork,
        }
    }
}

/// Whether work is sized by estimate or counted.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMode {
    Size,
    Count,
}

impl From<fl_core::EstimationMode> for EstimationMode {
    fn from(value: fl_core::EstimationMode) -> Self {
        match value {
            fl_core::EstimationMode::Size => EstimationMode::Size,
            fl_core::EstimationMode::Count => EstimationMode::Count,
        }
    }
}

/// Overall delivery health.
#[derive(JsonSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Health {
    Optimal,
    Warning,
    Critical,
}

impl From<fl_core::HealthLevel> for Health {
    fn from(value: fl_core::HealthLevel) -> Self {
        match value {
            fl_core::HealthLevel::Optimal => Health::Optimal,
            fl_core::HealthLevel::Warning => Health::Warning,
            fl_core::HealthLevel::Critical => Health::Critical,
        }
    }
}

/// A single metric value with its provenance.
#[derive(JsonSchema, Serialize, Debug, Clone, PartialEq)]
pub struct MetricJson {
    /// The value, or null when it could not be computed or does not apply.
    pub value: Option<f64>,
    /// Calculation path: a base code plus `+flag` suffixes.
    pub explanation_code: String,
    /// Data window the value was derived from.
    pub source_window: String,
}

impl From<&fl_core::MetricResult> for MetricJson {
    fn from(value: &fl_core::MetricResult) -> Self {
        MetricJson {
            value: value.value,
            explanation_code: value.explanation_code.clone(),
            source_window: value.source_window.clone(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
