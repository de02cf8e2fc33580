// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! flowlens - delivery telemetry for issue-tracker boards.
//!
//! This crate provides the `flowlens` CLI on top of [`fl_core`]. It reads a
//! JSON board export, serves it to the engine through [`source::FileSource`]
//! and prints the gated report as text or JSON.
//!
//! # Main Components
//!
//! - [`Cli`] - argument parsing
//! - [`config`] - TOML settings lookup
//! - [`source`] - the board export format and its collaborator impls
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
mod schema;

pub mod config;
pub mod env;
pub mod error;
pub mod source;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::report::ReportOptions;

/// Runs a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Report {
            board,
            project,
            now,
            items,
            output,
        } => {
            let config = config::load(cli.config.as_deref())?;
            let opts = ReportOptions {
                project,
                now,
                items,
                output: output.output,
            };
            commands::report::run(&board, opts, config).await
        }
        Command::Validity {
            tracking,
            kind,
            output,
        } => commands::validity::run(tracking, kind, output.output),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "flowlens", &mut std::io::stdout());
            Ok(())
        }
    }
}
