// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status classification.
//!
//! Maps a status id or name onto a [`CanonicalCategory`]. Exact table hits
//! are tried first (type-scoped before project-wide, ids before names); when
//! nothing matches, a vocabulary heuristic makes a best guess and the result
//! is marked with [`ClassificationMethod::Heuristic`] so callers can tell a
//! guess from a lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::CanonicalCategory;
use crate::status::StatusTable;

/// Substrings that mark a status name as finished.
const DONE_VOCABULARY: &[&str] = &[
    "done", "closed", "resolved", "released", "complete", "finished", "shipped", "deployed",
    "cancel", "rejected", "won't", "wont do",
];

/// Substrings that mark a status name as not yet started.
const NOT_STARTED_VOCABULARY: &[&str] = &[
    "open",
    "backlog",
    "to do",
    "todo",
    "new",
    "triage",
    "pending",
    "selected for development",
];

/// How a classification was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationMethod {
    /// Exact id match in the item type's own workflow.
    TypeId,
    /// Exact id match in the project-wide table.
    ExactId,
    /// Normalized name match in the item type's own workflow.
    TypeName,
    /// Normalized name match in the project-wide table.
    Name,
    /// Vocabulary guess; no table entry matched.
    Heuristic,
}

impl ClassificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationMethod::TypeId => "type-id",
            ClassificationMethod::ExactId => "exact-id",
            ClassificationMethod::TypeName => "type-name",
            ClassificationMethod::Name => "name",
            ClassificationMethod::Heuristic => "heuristic",
        }
    }

    /// Returns true when the category was guessed rather than looked up.
    pub fn is_heuristic(&self) -> bool {
        matches!(self, ClassificationMethod::Heuristic)
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of classifying one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: CanonicalCategory,
    pub method: ClassificationMethod,
}

/// Classifies a status id or display name.
///
/// `item_type` narrows the lookup to that type's workflow when the table has
/// one. Pure; never fails.
pub fn classify(status: &str, table: &StatusTable, item_type: Option<&str>) -> Classification {
    let scoped = item_type.and_then(|t| table.scope_for(t));

    let hit = |category, method| Classification { category, method };

    if let Some(entry) = scoped.and_then(|s| s.by_id(status)) {
        return hit(entry.category, ClassificationMethod::TypeId);
    }
    if let Some(entry) = table.project().by_id(status) {
        return hit(entry.category, ClassificationMethod::ExactId);
    }
    if let Some(entry) = scoped.and_then(|s| s.by_name(status)) {
        return hit(entry.category, ClassificationMethod::TypeName);
    }
    if let Some(entry) = table.project().by_name(status) {
        return hit(entry.category, ClassificationMethod::Name);
    }

    hit(heuristic_category(status), ClassificationMethod::Heuristic)
}

/// Vocabulary-based guess for a status name. Defaults to active.
pub fn heuristic_category(status: &str) -> CanonicalCategory {
    let lower = status.to_lowercase();
    if DONE_VOCABULARY.iter().any(|term| lower.contains(term)) {
        CanonicalCategory::Done
    } else if NOT_STARTED_VOCABULARY.iter().any(|term| lower.contains(term)) {
        CanonicalCategory::NotStarted
    } else {
        CanonicalCategory::Active
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
