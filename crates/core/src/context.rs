// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural facts about a project that decide which metrics make sense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::CanonicalCategory;
use crate::error::{Error, Result};
use crate::status::StatusTable;
use crate::validity::{compute_metric_validity, MetricValidity};

/// A validated tracker project key such as `FLOW` or `OPS_2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Parses a project key. Keys are case-insensitive and stored upper-case.
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim().to_uppercase();
        let mut chars = key.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(ProjectKey(key))
        } else {
            Err(Error::InvalidProjectKey(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProjectKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        ProjectKey::parse(&value)
    }
}

impl From<ProjectKey> for String {
    fn from(value: ProjectKey) -> Self {
        value.0
    }
}

/// How the project's board organizes work over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStrategy {
    /// Fixed-length iterations (sprints).
    Timeboxed,
    /// Continuous flow without iterations.
    Continuous,
    /// No board configured.
    None,
}

impl TrackingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStrategy::Timeboxed => "timeboxed",
            TrackingStrategy::Continuous => "continuous",
            TrackingStrategy::None => "none",
        }
    }
}

impl fmt::Display for TrackingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "timeboxed" | "scrum" => Ok(TrackingStrategy::Timeboxed),
            "continuous" | "kanban" => Ok(TrackingStrategy::Continuous),
            "none" => Ok(TrackingStrategy::None),
            _ => Err(Error::InvalidTrackingStrategy(s.to_string())),
        }
    }
}

/// Broad kind of project as declared in the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// Business-style project: no iterations, no size estimation.
    Generic,
    /// Software-style project with boards and iterations.
    StructuredWork,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Generic => "generic",
            ProjectKind::StructuredWork => "structured_work",
        }
    }

    /// Returns true if projects of this kind can run iterations at all.
    pub fn supports_iterations(&self) -> bool {
        matches!(self, ProjectKind::StructuredWork)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "generic" | "business" => Ok(ProjectKind::Generic),
            "structured_work" | "structured-work" | "software" => Ok(ProjectKind::StructuredWork),
            _ => Err(Error::InvalidProjectKind(s.to_string())),
        }
    }
}

/// Whether work is sized by estimate or counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMode {
    Size,
    Count,
}

impl EstimationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimationMode::Size => "size",
            EstimationMode::Count => "count",
        }
    }
}

impl fmt::Display for EstimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A lookup that fell back to its conservative default while building a
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedLookup {
    ProjectKind,
    BoardConfig,
    StatusTable,
    SizeField,
}

impl DegradedLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradedLookup::ProjectKind => "project_kind",
            DegradedLookup::BoardConfig => "board_config",
            DegradedLookup::StatusTable => "status_table",
            DegradedLookup::SizeField => "size_field",
        }
    }
}

impl fmt::Display for DegradedLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved structural facts about one project for one request.
///
/// Built once and never mutated; consumers share it by reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralContext {
    pub project_key: ProjectKey,
    pub tracking_strategy: TrackingStrategy,
    pub project_kind: ProjectKind,
    pub estimation_mode: EstimationMode,
    /// Field holding size estimates, when one was configured or discovered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_field: Option<String>,
    #[serde(skip)]
    pub status_table: StatusTable,
    /// Status ids that mean work has started.
    pub start_statuses: Vec<String>,
    /// Status ids that mean work is finished.
    pub done_statuses: Vec<String>,
    pub metric_validity: MetricValidity,
    /// Lookups that failed and were replaced by defaults.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<DegradedLookup>,
}

impl StructuralContext {
    /// Assembles a context and derives everything that follows from its
    /// inputs (status lists, estimation mode, metric validity).
    pub fn new(
        project_key: ProjectKey,
        project_kind: ProjectKind,
        tracking_strategy: TrackingStrategy,
        size_field: Option<String>,
        status_table: StatusTable,
    ) -> Self {
        let estimation_mode = if size_field.is_some() {
            EstimationMode::Size
        } else {
            EstimationMode::Count
        };
        StructuralContext {
            project_key,
            tracking_strategy,
            project_kind,
            estimation_mode,
            size_field,
            start_statuses: status_table.ids_in(CanonicalCategory::Active),
            done_statuses: status_table.ids_in(CanonicalCategory::Done),
            status_table,
            metric_validity: compute_metric_validity(project_kind, tracking_strategy),
            degraded: Vec::new(),
        }
    }

    /// The context used when nothing about the project could be fetched.
    pub fn conservative(project_key: ProjectKey) -> Self {
        let mut context = Self::new(
            project_key,
            ProjectKind::StructuredWork,
            TrackingStrategy::Timeboxed,
            None,
            StatusTable::new(),
        );
        context.degraded = vec![
            DegradedLookup::ProjectKind,
            DegradedLookup::BoardConfig,
            DegradedLookup::StatusTable,
            DegradedLookup::SizeField,
        ];
        context
    }

    /// Returns true if iteration-scoped metrics apply.
    pub fn uses_iterations(&self) -> bool {
        self.tracking_strategy == TrackingStrategy::Timeboxed
            && self.project_kind.supports_iterations()
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
