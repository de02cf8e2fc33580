// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fl-core: Delivery telemetry engine for flowlens
//!
//! This crate classifies tracker statuses into canonical categories,
//! reconstructs item history, and computes flow and iteration metrics gated
//! by the structure of each project.

pub mod cache;
pub mod category;
pub mod classify;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod flow;
pub mod item;
pub mod metrics;
pub mod reconstruct;
pub mod source;
pub mod status;
pub mod telemetry;
pub mod topology;
pub mod validity;

#[cfg(test)]
mod testing;

pub use cache::{TopologyCache, TtlCache};
pub use category::CanonicalCategory;
pub use classify::{classify, Classification, ClassificationMethod};
pub use clock::{ClockSource, ManualClock, SystemClock};
pub use config::TelemetryConfig;
pub use context::{
    DegradedLookup, EstimationMode, ProjectKey, ProjectKind, StructuralContext, TrackingStrategy,
};
pub use error::{Error, Result, SourceError};
pub use flow::{flow_category, FlowCategory};
pub use item::{ItemRecord, IterationSummary, TransitionEvent, WorkItemSnapshot};
pub use metrics::{HealthLevel, MetricResult};
pub use reconstruct::{active_duration, category_at_time, ActiveDuration, CategoryAt};
pub use source::{
    BoardConfig, BoardRecords, BoardType, FieldInfo, ItemDataSource, ProjectSource,
    StatusTableSource,
};
pub use status::{StatusEntry, StatusTable};
pub use telemetry::{CategorizedItem, TelemetryEngine, TelemetryRequest, TelemetryResult};
pub use topology::WorkflowTopologyBuilder;
pub use validity::{compute_metric_validity, Metric, MetricValidity, Validity};
