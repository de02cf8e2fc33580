// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["flowlens"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap_or_else(|e| panic!("{e}"))
}

#[test]
fn report_defaults() {
    let cli = parse(&["report", "board.json"]);
    assert!(!cli.verbose);
    assert!(cli.config.is_none());
    match cli.command {
        Command::Report {
            board,
            project,
            now,
            items,
            output,
        } => {
            assert_eq!(board, PathBuf::from("board.json"));
            assert!(project.is_none());
            assert!(now.is_none());
            assert!(!items);
            assert_eq!(output.output, OutputFormat::Text);
        }
        _ => panic!("expected report"),
    }
}

#[test]
fn report_with_every_flag() {
    let cli = parse(&[
        "report",
        "b.json",
        "-p",
        "ops",
        "--now",
        "2026-01-05T10:00:00Z",
        "--items",
        "-o",
        "json",
        "-v",
        "--config",
        "c.toml",
    ]);
    assert!(cli.verbose);
    assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    match cli.command {
        Command::Report {
            project,
            now,
            items,
            output,
            ..
        } => {
            assert_eq!(project.as_deref(), Some("ops"));
            assert_eq!(now.as_deref(), Some("2026-01-05T10:00:00Z"));
            assert!(items);
            assert_eq!(output.output, OutputFormat::Json);
        }
        _ => panic!("expected report"),
    }
}

#[test]
fn report_requires_board() {
    assert!(Cli::try_parse_from(["flowlens", "report"]).is_err());
}

#[test]
fn report_rejects_unknown_output() {
    assert!(Cli::try_parse_from(["flowlens", "report", "b.json", "-o", "yaml"]).is_err());
}
