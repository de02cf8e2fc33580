// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use fl_core::{ProjectKind, TrackingStrategy};
use std::path::PathBuf;

pub use args::OutputArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "flowlens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Delivery telemetry for issue-tracker boards")]
#[command(
    long_about = "Delivery telemetry for issue-tracker boards.\n\n\
    Classifies workflow statuses, replays item history and reports flow and \
    iteration metrics that fit how the project actually works."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute delivery telemetry from a board export
    #[command(after_help = colors::examples("\
Examples:
  flowlens report board.json                        Text report
  flowlens report board.json -o json                JSON report
  flowlens report board.json --items                Include per-item drill-down
  flowlens report board.json --project OPS          Override the project key
  flowlens report board.json --now 2026-01-05T10:00:00Z   Pin the clock"))]
    Report {
        /// JSON board export to read
        #[arg(value_name = "board")]
        board: PathBuf,

        /// Project key (defaults to the key in the board file)
        #[arg(long, short)]
        project: Option<String>,

        /// Evaluate as of this RFC 3339 instant instead of now
        #[arg(long, value_name = "time")]
        now: Option<String>,

        /// Show per-item categories and active time
        #[arg(long)]
        items: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show which metrics apply to a project structure
    #[command(after_help = colors::examples("\
Examples:
  flowlens validity --tracking scrum                 Scrum software project
  flowlens validity --tracking kanban -o json        Kanban, as JSON
  flowlens validity --tracking none --kind generic   Business project"))]
    Validity {
        /// Tracking strategy (timeboxed, continuous, none)
        #[arg(long, short, value_parser = args::parse_tracking)]
        tracking: TrackingStrategy,

        /// Project kind (structured_work, generic)
        #[arg(long, short, value_parser = args::parse_kind, default_value = "structured_work")]
        kind: ProjectKind,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Output JSON Schema for commands with JSON output
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  flowlens schema report      Schema for 'flowlens report -o json'
  flowlens schema validity    Schema for 'flowlens validity -o json'")
    )]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'flowlens report' JSON output
    Report,
    /// Output JSON Schema for 'flowlens validity' JSON output
    Validity,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
