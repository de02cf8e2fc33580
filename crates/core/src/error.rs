// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fl-core operations.
//!
//! The engine recovers from missing or partial upstream data locally, so the
//! only error that crosses the crate boundary is malformed request input.
//! [`SourceError`] is what external collaborators hand back; the engine turns
//! it into degraded results and explanation codes instead of propagating it.

use thiserror::Error;

/// Errors surfaced to callers of fl-core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid project key: '{0}'\n  hint: keys start with a letter and contain only A-Z, 0-9 and '_'")]
    InvalidProjectKey(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: not_started, active, done")]
    InvalidCategory(String),

    #[error("invalid tracking strategy: '{0}'\n  hint: valid strategies are: timeboxed, continuous, none")]
    InvalidTrackingStrategy(String),

    #[error("invalid project kind: '{0}'\n  hint: valid kinds are: generic, structured_work")]
    InvalidProjectKind(String),

    #[error("invalid metric: '{0}'")]
    InvalidMetric(String),
}

/// Failures reported by external data collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("malformed upstream payload: {0}")]
    Malformed(String),
}

/// A specialized Result type for fl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
