// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `flowlens validity` JSON output.

use fl_core::{MetricValidity, Validity};
use schemars::JsonSchema;
use serde::Serialize;

use super::{ProjectKind, TrackingStrategy};

/// JSON output structure for the validity command.
#[derive(JsonSchema, Serialize, Debug, Clone, PartialEq)]
pub struct ValidityJson {
    pub tracking_strategy: TrackingStrategy,
    pub project_kind: ProjectKind,
    /// Metrics shown for this structure.
    pub valid: Vec<String>,
    /// Metrics withheld for this structure.
    pub hidden: Vec<String>,
}

impl ValidityJson {
    pub fn new(
        tracking: fl_core::TrackingStrategy,
        kind: fl_core::ProjectKind,
        matrix: &MetricValidity,
    ) -> Self {
        let names = |wanted: Validity| -> Vec<String> {
            matrix
                .iter()
                .filter(|(_, v)| *v == wanted)
                .map(|(m, _)| m.to_string())
                .collect()
        };
        ValidityJson {
            tracking_strategy: tracking.into(),
            project_kind: kind.into(),
            valid: names(Validity::Valid),
            hidden: names(Validity::Hidden),
        }
    }
}
