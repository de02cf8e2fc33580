// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in the flowlens CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] fl_core::Error),

    #[error("board file not found: {}\n  hint: pass the path to a JSON board export", .0.display())]
    BoardNotFound(PathBuf),

    #[error("cannot read board file {}: {source}", .path.display())]
    BoardParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no project key\n  hint: set \"project.key\" in the board file or pass --project")]
    MissingProjectKey,

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timestamp: '{0}'\n  hint: use RFC 3339, e.g. 2026-01-05T10:00:00Z")]
    InvalidTimestamp(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flowlens operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
