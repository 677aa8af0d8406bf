//! Menu Grouping Engine
//!
//! Converts a flat, unordered list of `MenuEntry` records into an ordered tree
//! of at most two levels (group heading, then items), honoring active/inactive
//! visibility and orphan handling.
//!
//! The engine is a pure function: no I/O, no mutation of its input, no errors.
//! Malformed input degrades by rule rather than being rejected.

use std::collections::{HashMap, HashSet};

use crate::models::{Group, MenuEntry};

/// Sort order assigned to implicit orphan groups.
///
/// Policy choice: a child whose `category` names no defined parent still gets
/// a group, but that group always sorts after every explicitly ordered one.
pub const ORPHAN_SORT_ORDER: i32 = 9999;

/// Group a flat entry list into an ordered list of groups.
///
/// Three-pass classification:
///
/// 1. Collect the names of every defined parent (entries without a
///    `category`), active or not. The full set is needed later to tell an
///    inactive parent apart from a missing one.
/// 2. Materialize one group per *active* defined parent, seeded empty with the
///    parent's `display_order`. Inactive parents get no group, which hides
///    their entire subtree.
/// 3. Walk the *active* children in input order:
///    - category matches a materialized group: attach;
///    - category names no defined parent at all: orphan, attach to an implicit
///      group created at [`ORPHAN_SORT_ORDER`];
///    - category names an inactive defined parent: drop. Children of an
///      inactive parent are hidden with it, never promoted to top level.
///
/// Groups and the items within each group come out sorted ascending by
/// `display_order`; ties keep first-seen order (stable sorts throughout), so
/// the output is deterministic for a given input.
pub fn group_entries(entries: &[MenuEntry]) -> Vec<Group> {
    let defined_parent_names: HashSet<&str> = entries
        .iter()
        .filter(|e| e.is_defined_parent())
        .map(|e| e.name.as_str())
        .collect();

    // Accumulate into a Vec plus a name index so tie order follows insertion
    // order, independent of any native map iteration order.
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for parent in entries.iter().filter(|e| e.is_defined_parent()) {
        if !parent.is_active {
            continue;
        }
        // Duplicate parent names: first one wins the group slot.
        if index.contains_key(parent.name.as_str()) {
            continue;
        }
        index.insert(parent.name.clone(), groups.len());
        groups.push(Group::new(parent.name.clone(), parent.display_order));
    }

    for child in entries.iter().filter(|e| e.is_active) {
        let Some(category) = child.parent_name() else {
            continue;
        };
        if let Some(&slot) = index.get(category) {
            groups[slot].items.push(child.clone());
        } else if !defined_parent_names.contains(category) {
            let slot = groups.len();
            index.insert(category.to_string(), slot);
            groups.push(Group::new(category, ORPHAN_SORT_ORDER));
            groups[slot].items.push(child.clone());
        }
        // Remaining case: the parent exists but is inactive. The child is
        // dropped along with it.
    }

    groups.sort_by_key(|g| g.display_order);
    for group in &mut groups {
        group.items.sort_by_key(|e| e.display_order);
    }
    groups
}
