// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The three-bucket workflow model every tracker status is reduced to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Canonical workflow category of a status.
///
/// The model is fixed at three buckets. Workflows with more granular stages
/// are always folded into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalCategory {
    /// Work has not begun (backlog, to do, open).
    NotStarted,
    /// Work is in progress.
    Active,
    /// Work is finished (done, closed, released).
    Done,
}

impl CanonicalCategory {
    /// All categories in workflow order.
    pub const ALL: [CanonicalCategory; 3] = [
        CanonicalCategory::NotStarted,
        CanonicalCategory::Active,
        CanonicalCategory::Done,
    ];

    /// Returns the string representation used in output and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCategory::NotStarted => "not_started",
            CanonicalCategory::Active => "active",
            CanonicalCategory::Done => "done",
        }
    }

    /// Returns true for the in-progress bucket.
    pub fn is_active(&self) -> bool {
        matches!(self, CanonicalCategory::Active)
    }

    /// Returns true for the finished bucket.
    pub fn is_done(&self) -> bool {
        matches!(self, CanonicalCategory::Done)
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalCategory {
    type Err = Error;

    /// Accepts the snake_case names plus the tracker-native category keys
    /// (`new`, `indeterminate`, `done`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "not_started" | "not-started" | "new" | "todo" => Ok(CanonicalCategory::NotStarted),
            "active" | "indeterminate" | "in_progress" => Ok(CanonicalCategory::Active),
            "done" => Ok(CanonicalCategory::Done),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
