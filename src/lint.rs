//! Menu validation
//!
//! The grouping engine resolves inconsistent input silently, by rule. The
//! check pass makes those resolutions visible so editors can fix the menu
//! instead of wondering where an entry went: hidden subtrees, orphaned
//! categories, duplicate parent names, dead ends.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::MenuEntry;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "note"),
        }
    }
}

/// A single check finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Stable check name, e.g. "hidden-subtree"
    pub check: String,
    pub message: String,
    /// Entry the finding points at, when there is a single one
    pub entry_id: Option<u64>,
}

/// Validation results for one menu load
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuReport {
    pub findings: Vec<Finding>,
}

impl MenuReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_warning(&mut self, check: &str, message: String, entry_id: Option<u64>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            check: check.to_string(),
            message,
            entry_id,
        });
    }

    fn add_info(&mut self, check: &str, message: String, entry_id: Option<u64>) {
        self.findings.push(Finding {
            severity: Severity::Info,
            check: check.to_string(),
            message,
            entry_id,
        });
    }

    pub fn warnings(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    pub fn notes(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Info)
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run all checks against a flat entry list.
pub fn check_entries(entries: &[MenuEntry]) -> MenuReport {
    let mut report = MenuReport::new();

    let mut parent_active: HashMap<&str, bool> = HashMap::new();
    let mut duplicates: HashSet<&str> = HashSet::new();
    for parent in entries.iter().filter(|e| e.is_defined_parent()) {
        let name = parent.name.as_str();
        if parent_active.contains_key(name) {
            duplicates.insert(name);
        }
        // Any active duplicate makes the group visible.
        let active = parent_active.entry(name).or_insert(false);
        *active = *active || parent.is_active;
    }

    for name in &duplicates {
        report.add_warning(
            "duplicate-parent",
            format!("multiple top-level entries share the name '{name}'; only the first active one heads the group"),
            None,
        );
    }

    for child in entries {
        let Some(category) = child.parent_name() else {
            continue;
        };
        if !child.is_active {
            continue;
        }
        match parent_active.get(category) {
            Some(true) => {}
            Some(false) => report.add_warning(
                "hidden-subtree",
                format!(
                    "'{}' is hidden because its parent '{}' is inactive",
                    child.name, category
                ),
                Some(child.id),
            ),
            None => report.add_warning(
                "orphan-category",
                format!(
                    "'{}' references unknown parent '{}'; it will render in a sort-last group",
                    child.name, category
                ),
                Some(child.id),
            ),
        }
    }

    // Empty active groups with no link render as a dead end.
    for parent in entries.iter().filter(|e| e.is_defined_parent()) {
        if !parent.is_active {
            continue;
        }
        let has_active_child = entries
            .iter()
            .any(|e| e.is_active && e.parent_name() == Some(parent.name.as_str()));
        if !has_active_child && parent.link.is_none() {
            report.add_warning(
                "missing-fallback",
                format!(
                    "'{}' has no visible children and no link to fall back to",
                    parent.name
                ),
                Some(parent.id),
            );
        }
    }

    for entry in entries.iter().filter(|e| !e.is_active) {
        report.add_info(
            "inactive-entry",
            format!("'{}' is inactive and will not render", entry.name),
            Some(entry.id),
        );
    }

    report
}
