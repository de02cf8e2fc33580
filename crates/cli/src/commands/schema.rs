// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema documents for commands that support JSON output.

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{report, validity};
use schemars::schema_for;

/// Schema text for `cmd`.
pub fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Report => schema_for!(report::ReportJson),
        SchemaCommand::Validity => schema_for!(validity::ValidityJson),
    };
    super::to_json(&schema)
}

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
