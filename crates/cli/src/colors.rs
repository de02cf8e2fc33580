// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use fl_core::{CanonicalCategory, HealthLevel};
use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Secondary detail: medium grey
    pub const CONTEXT: u8 = 245;
    /// Healthy values: soft green
    pub const GOOD: u8 = 114;
    /// Values needing attention: amber
    pub const WARN: u8 = 179;
    /// Values needing action: muted red
    pub const BAD: u8 = 167;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Wraps `text` in a color, or returns it unchanged when colors are off.
pub fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("{}{}{}", fg256(code), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a health level.
pub fn health_code(level: HealthLevel) -> u8 {
    match level {
        HealthLevel::Optimal => codes::GOOD,
        HealthLevel::Warning => codes::WARN,
        HealthLevel::Critical => codes::BAD,
    }
}

pub fn health(level: HealthLevel) -> String {
    paint(health_code(level), level.as_str())
}

/// Color code for a canonical category.
pub fn category_code(category: CanonicalCategory) -> u8 {
    match category {
        CanonicalCategory::NotStarted => codes::CONTEXT,
        CanonicalCategory::Active => codes::WARN,
        CanonicalCategory::Done => codes::GOOD,
    }
}

pub fn category(category: CanonicalCategory) -> String {
    paint(category_code(category), category.as_str())
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Other lines split at the first run of
/// two or more spaces into a command (literal) and a description (plain).
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    literal(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset where the description starts: the first run of 2+ spaces.
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    let gap = rest.len() - rest.trim_start_matches(' ').len();
    (start + gap < line.len()).then_some(start)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
