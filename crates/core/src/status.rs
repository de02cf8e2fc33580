// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-project status lookup tables.
//!
//! A [`StatusTable`] maps status ids, and redundantly their normalized
//! display names, to a [`StatusEntry`]. Projects whose workflows differ per
//! work-item type get additional type-scoped buckets that take precedence
//! over the project-wide mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::CanonicalCategory;

/// A single workflow status as reported by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Tracker-assigned identifier. Identity of the status.
    pub id: String,
    /// Human-facing name, used as a case-insensitive secondary key.
    pub display_name: String,
    /// Canonical bucket the status belongs to.
    pub category: CanonicalCategory,
}

impl StatusEntry {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        category: CanonicalCategory,
    ) -> Self {
        StatusEntry {
            id: id.into(),
            display_name: display_name.into(),
            category,
        }
    }
}

/// Normalizes a status or type name for lookup: trimmed, lower-cased, inner
/// whitespace collapsed to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Id and name indexes for one scope (project-wide or one item type).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusScope {
    by_id: HashMap<String, StatusEntry>,
    by_name: HashMap<String, StatusEntry>,
}

impl StatusScope {
    fn insert(&mut self, entry: StatusEntry) {
        self.by_name
            .insert(normalize_name(&entry.display_name), entry.clone());
        self.by_id.insert(entry.id.clone(), entry);
    }

    /// Looks up a status by exact id.
    pub fn by_id(&self, id: &str) -> Option<&StatusEntry> {
        self.by_id.get(id)
    }

    /// Looks up a status by normalized display name.
    pub fn by_name(&self, name: &str) -> Option<&StatusEntry> {
        self.by_name.get(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Full status table for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTable {
    project: StatusScope,
    by_type: HashMap<String, StatusScope>,
}

impl StatusTable {
    /// Creates an empty table. Every lookup against it falls through to the
    /// classifier's heuristic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a project-wide table from a list of entries.
    pub fn from_entries(entries: impl IntoIterator<Item = StatusEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Adds a project-wide entry. Later entries with the same id or name win.
    pub fn insert(&mut self, entry: StatusEntry) {
        self.project.insert(entry);
    }

    /// Adds an entry that only applies to items of `item_type`.
    ///
    /// Scoped entries are also registered project-wide when no project-wide
    /// entry exists for the id yet, so untyped lookups can still find them.
    pub fn insert_scoped(&mut self, item_type: &str, entry: StatusEntry) {
        if self.project.by_id(&entry.id).is_none() {
            self.project.insert(entry.clone());
        }
        self.by_type
            .entry(normalize_name(item_type))
            .or_default()
            .insert(entry);
    }

    /// Project-wide lookups.
    pub fn project(&self) -> &StatusScope {
        &self.project
    }

    /// Type-scoped lookups, if the project defines a workflow for `item_type`.
    pub fn scope_for(&self, item_type: &str) -> Option<&StatusScope> {
        self.by_type.get(&normalize_name(item_type))
    }

    /// All project-wide entries, sorted by id for stable output.
    pub fn entries(&self) -> Vec<&StatusEntry> {
        let mut entries: Vec<&StatusEntry> = self.project.by_id.values().collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    /// Ids of every project-wide status in `category`, sorted.
    pub fn ids_in(&self, category: CanonicalCategory) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.category == category)
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.project.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_empty() && self.by_type.is_empty()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
