// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs and value parsers for CLI commands.

use clap::Args;
use fl_core::{ProjectKind, TrackingStrategy};

use super::OutputFormat;

/// Output format selection.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

pub(super) fn parse_tracking(s: &str) -> Result<TrackingStrategy, String> {
    s.parse()
        .map_err(|_| "expected timeboxed, continuous or none (or scrum, kanban)".to_string())
}

pub(super) fn parse_kind(s: &str) -> Result<ProjectKind, String> {
    s.parse()
        .map_err(|_| "expected structured_work or generic (or software, business)".to_string())
}
