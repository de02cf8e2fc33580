// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use fl_core::{compute_metric_validity, ProjectKind, TrackingStrategy};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;
use crate::schema::validity::ValidityJson;

/// Renders the validity matrix for a project structure.
pub fn render(
    tracking: TrackingStrategy,
    kind: ProjectKind,
    output: OutputFormat,
) -> Result<String> {
    let matrix = compute_metric_validity(kind, tracking);
    match output {
        OutputFormat::Text => Ok(display::format_validity(tracking, kind, &matrix)),
        OutputFormat::Json => super::to_json(&ValidityJson::new(tracking, kind, &matrix)),
    }
}

/// Run the validity command.
pub fn run(tracking: TrackingStrategy, kind: ProjectKind, output: OutputFormat) -> Result<()> {
    println!("{}", render(tracking, kind, output)?);
    Ok(())
}

#[cfg(test)]
#[path = "validity_tests.rs"]
mod tests;
