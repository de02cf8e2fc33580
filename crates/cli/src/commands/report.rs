// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.
//!
//! Reads a board export, runs the telemetry engine against it and prints the
//! gated result.

use chrono::{DateTime, Utc};
use fl_core::{
    ClockSource, ManualClock, SystemClock, TelemetryConfig, TelemetryEngine, TelemetryRequest,
    TelemetryResult,
};
use std::path::Path;
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::display;
use crate::error::{Error, Result};
use crate::schema::report::ReportJson;
use crate::source::{BoardFile, FileSource};

/// Options for one report run.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub project: Option<String>,
    pub now: Option<String>,
    pub items: bool,
    pub output: OutputFormat,
}

/// Parses an RFC 3339 instant given on the command line.
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp(raw.to_string()))
}

/// Computes telemetry for the board at `board`.
pub async fn compute(
    board: &Path,
    opts: &ReportOptions,
    config: TelemetryConfig,
) -> Result<TelemetryResult> {
    let clock: Arc<dyn ClockSource> = match &opts.now {
        Some(raw) => Arc::new(ManualClock::at(parse_now(raw)?)),
        None => Arc::new(SystemClock),
    };
    let source = Arc::new(FileSource::new(BoardFile::load(board)?));
    let key = opts
        .project
        .clone()
        .or_else(|| source.project_key().map(str::to_string))
        .ok_or(Error::MissingProjectKey)?;

    tracing::debug!(board = %board.display(), project = %key, "running report");
    let engine = TelemetryEngine::new(source.clone(), source.clone(), source, config, clock);
    Ok(engine.run(&TelemetryRequest::new(key)).await?)
}

/// Renders a result in the requested format.
pub fn render(result: &TelemetryResult, opts: &ReportOptions, locale: &str) -> Result<String> {
    match opts.output {
        OutputFormat::Text => Ok(display::format_report(result, locale, opts.items)),
        OutputFormat::Json => super::to_json(&ReportJson::new(result, opts.items)),
    }
}

/// Run the report command.
pub async fn run(board: &Path, opts: ReportOptions, config: TelemetryConfig) -> Result<()> {
    let locale = config.locale.clone();
    let result = compute(board, &opts, config).await?;
    println!("{}", render(&result, &opts, &locale)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
