// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .error(fg(colors::codes::BAD))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_telemetry}
  {report}      Compute delivery telemetry from a board export
  {validity}    Show which metrics apply to a project structure

{header_setup}
  {schema}      Output JSON Schema for commands
  {completion}  Generate shell completions
",
        header_telemetry = colors::header("Telemetry:"),
        header_setup = colors::header("Setup:"),
        report = colors::literal("report"),
        validity = colors::literal("validity"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  flowlens report board.json              Report on a board export
  flowlens report board.json -o json      Same, as JSON
  flowlens validity --tracking kanban     Metrics shown for kanban boards",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
