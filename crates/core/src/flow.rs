// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Groups work-item types into flow categories by name.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::item::WorkItemSnapshot;

/// Kind of value a work item delivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowCategory {
    Feature,
    Defect,
    Debt,
    Risk,
    Other,
}

impl FlowCategory {
    pub const ALL: [FlowCategory; 5] = [
        FlowCategory::Feature,
        FlowCategory::Defect,
        FlowCategory::Debt,
        FlowCategory::Risk,
        FlowCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowCategory::Feature => "feature",
            FlowCategory::Defect => "defect",
            FlowCategory::Debt => "debt",
            FlowCategory::Risk => "risk",
            FlowCategory::Other => "other",
        }
    }
}

impl fmt::Display for FlowCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Checked in order; the first matching category wins.
const PATTERNS: &[(FlowCategory, &str)] = &[
    (FlowCategory::Defect, r"(?i)\b(bug|defect|incident|hotfix|problem)s?\b"),
    (FlowCategory::Risk, r"(?i)\b(risk|security|vulnerabilit(y|ies)|compliance|audit)\b"),
    (FlowCategory::Debt, r"(?i)\b(tech(nical)?[ -]?debt|debt|refactor(ing)?|chore|maintenance|spike)\b"),
    (FlowCategory::Feature, r"(?i)\b(story|stories|feature|epic|improvement|enhancement|requirement)s?\b"),
];

fn compiled() -> &'static [(FlowCategory, Regex)] {
    static COMPILED: OnceLock<Vec<(FlowCategory, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (*category, re)))
            .collect()
    })
}

/// Flow category for an item type name. Unknown or missing types are
/// [`FlowCategory::Other`].
pub fn flow_category(item_type: Option<&str>) -> FlowCategory {
    let Some(name) = item_type else {
        return FlowCategory::Other;
    };
    compiled()
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map_or(FlowCategory::Other, |(category, _)| *category)
}

/// Item counts per flow category. Every category is present, zero or not.
pub fn flow_distribution(items: &[WorkItemSnapshot]) -> BTreeMap<FlowCategory, usize> {
    let mut counts: BTreeMap<FlowCategory, usize> =
        FlowCategory::ALL.into_iter().map(|c| (c, 0)).collect();
    for item in items {
        *counts.entry(flow_category(item.item_type.as_deref())).or_default() += 1;
    }
    counts
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
