//! Property tests for the grouping engine.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics", "deterministic under input
//! permutation" and "hiding cascades".
//!
//! Run with: `cargo test --test properties`

use std::collections::{BTreeMap, BTreeSet, HashSet};

use proptest::prelude::*;

use navmenu::{group_entries, MenuEntry, ORPHAN_SORT_ORDER};

/// Small shared name pool so parents, children and orphans actually collide.
const NAMES: &[&str] = &["alpha", "beta", "gamma", "delta", "epsilon"];
const CATEGORIES: &[&str] = &["alpha", "beta", "gamma", "zeta", "omega"];

fn entry_strategy() -> impl Strategy<Value = MenuEntry> {
    (
        prop::sample::select(NAMES),
        prop::option::of(prop::sample::select(CATEGORIES)),
        any::<bool>(),
        0i32..50,
    )
        .prop_map(|(name, category, is_active, display_order)| {
            let mut entry = MenuEntry::new(0, name, display_order).with_active(is_active);
            if let Some(category) = category {
                entry = entry.with_category(category);
            }
            entry
        })
}

/// A menu with unique entry ids assigned by position.
fn menu_strategy() -> impl Strategy<Value = Vec<MenuEntry>> {
    prop::collection::vec(entry_strategy(), 0..24).prop_map(|mut entries| {
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.id = i as u64 + 1;
        }
        entries
    })
}

/// A menu whose defined parents have unique names, matching the content
/// invariant. Duplicate parent names resolve first-wins, which depends on
/// input order, so permutation-invariance only holds for unique-parent menus.
fn unique_parent_menu_strategy() -> impl Strategy<Value = Vec<MenuEntry>> {
    menu_strategy().prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|e| !e.is_defined_parent() || seen.insert(e.name.clone()))
            .collect()
    })
}

/// Order-insensitive view of a grouping result: name -> (order, item ids).
fn canonical(groups: &[navmenu::Group]) -> BTreeMap<String, (i32, BTreeSet<u64>)> {
    groups
        .iter()
        .map(|g| {
            (
                g.name.clone(),
                (g.display_order, g.items.iter().map(|i| i.id).collect()),
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Grouping never panics, and both groups and items come out
    /// sorted ascending by display_order.
    #[test]
    fn property_output_is_sorted(entries in menu_strategy()) {
        let groups = group_entries(&entries);

        for pair in groups.windows(2) {
            prop_assert!(
                pair[0].display_order <= pair[1].display_order,
                "groups out of order: {} ({}) before {} ({})",
                pair[0].name, pair[0].display_order, pair[1].name, pair[1].display_order
            );
        }
        for group in &groups {
            for pair in group.items.windows(2) {
                prop_assert!(pair[0].display_order <= pair[1].display_order);
            }
        }
    }

    /// PROPERTY: Permuting the input changes at most the relative order of
    /// equal display_order values; group membership and orders are identical.
    #[test]
    fn property_deterministic_under_permutation(
        (entries, order) in unique_parent_menu_strategy().prop_flat_map(|v| {
            let len = v.len();
            let indices: Vec<usize> = (0..len).collect();
            (Just(v), Just(indices).prop_shuffle())
        })
    ) {
        let permuted: Vec<MenuEntry> = order.iter().map(|&i| entries[i].clone()).collect();

        let original = group_entries(&entries);
        let shuffled = group_entries(&permuted);

        prop_assert_eq!(canonical(&original), canonical(&shuffled));
    }

    /// PROPERTY: An inactive defined parent hides its whole subtree. No group
    /// carries its name and no child referencing it survives, not even as an
    /// orphan.
    #[test]
    fn property_hiding_cascades(entries in menu_strategy()) {
        let groups = group_entries(&entries);

        let active_parent_names: HashSet<&str> = entries
            .iter()
            .filter(|e| e.is_defined_parent() && e.is_active)
            .map(|e| e.name.as_str())
            .collect();
        let inactive_only_parents: HashSet<&str> = entries
            .iter()
            .filter(|e| e.is_defined_parent() && !e.is_active)
            .map(|e| e.name.as_str())
            .filter(|name| !active_parent_names.contains(name))
            .collect();

        for &name in &inactive_only_parents {
            prop_assert!(
                !groups.iter().any(|g| g.name == name),
                "group '{}' should be hidden with its inactive parent", name
            );
            for group in &groups {
                prop_assert!(
                    !group.items.iter().any(|i| i.parent_name() == Some(name)),
                    "child of inactive parent '{}' leaked into group '{}'", name, group.name
                );
            }
        }
    }

    /// PROPERTY: Orphan groups sort after every explicitly ordered group, and
    /// only ever hold children whose category names no defined parent.
    #[test]
    fn property_orphans_sort_last(entries in menu_strategy()) {
        let groups = group_entries(&entries);

        let defined_parent_names: HashSet<&str> = entries
            .iter()
            .filter(|e| e.is_defined_parent())
            .map(|e| e.name.as_str())
            .collect();

        let mut seen_orphan = false;
        for group in &groups {
            let is_orphan = !defined_parent_names.contains(group.name.as_str());
            if is_orphan {
                // Generated explicit orders stay below the sentinel.
                prop_assert_eq!(group.display_order, ORPHAN_SORT_ORDER);
                prop_assert!(!group.items.is_empty());
                for item in &group.items {
                    prop_assert_eq!(item.parent_name(), Some(group.name.as_str()));
                }
                seen_orphan = true;
            } else {
                prop_assert!(
                    !seen_orphan,
                    "explicit group '{}' sorted after an orphan group", group.name
                );
            }
        }
    }

    /// PROPERTY: Every active defined parent is emitted as a group, children
    /// or not.
    #[test]
    fn property_active_parents_always_emitted(entries in menu_strategy()) {
        let groups = group_entries(&entries);

        for parent in entries.iter().filter(|e| e.is_defined_parent() && e.is_active) {
            prop_assert!(
                groups.iter().any(|g| g.name == parent.name),
                "active parent '{}' missing from output", parent.name
            );
        }
    }

    /// PROPERTY: No child is duplicated or rewritten. Output items are a
    /// subset of the input's active children, attached to the group their
    /// category names, each at most once.
    #[test]
    fn property_children_conserved(entries in menu_strategy()) {
        let groups = group_entries(&entries);

        let mut seen_ids = HashSet::new();
        for group in &groups {
            for item in &group.items {
                prop_assert!(seen_ids.insert(item.id), "entry {} attached twice", item.id);

                let original = entries.iter().find(|e| e.id == item.id);
                prop_assert_eq!(original, Some(item));
                prop_assert!(item.is_active);
                prop_assert_eq!(item.parent_name(), Some(group.name.as_str()));
            }
        }
    }
}
