//! Plain-text rendering of grouped menus
//!
//! Accordion-style tree for terminals. Implements the renderer side of the
//! empty-group contract: a group with no items falls back to the heading
//! parent's own `link` as a single "go to" action.
//!
//! Link columns are aligned by display width, not byte or char count, since
//! menu labels are frequently double-width (CJK).

use unicode_width::UnicodeWidthStr;

use crate::models::{Group, MenuEntry};

/// Resolve the fallback link for a group: the `link` of the defined parent
/// entry whose `name` matches the group name.
///
/// Orphan groups have no defined parent, so they never resolve a fallback.
pub fn fallback_link<'a>(entries: &'a [MenuEntry], group_name: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.is_defined_parent() && e.name == group_name)
        .and_then(|e| e.link.as_deref())
}

/// Render groups as an indented text tree.
///
/// `entries` is the flat input list the groups were derived from; it is only
/// consulted for the empty-group fallback lookup.
pub fn render_groups(groups: &[Group], entries: &[MenuEntry]) -> String {
    let mut out = String::new();
    for group in groups {
        if group.is_empty() {
            match fallback_link(entries, &group.name) {
                Some(link) => {
                    out.push_str(&format!("{}  -> {}\n", group.name, link));
                }
                None => {
                    out.push_str(&group.name);
                    out.push('\n');
                }
            }
            continue;
        }

        out.push_str(&group.name);
        out.push('\n');

        let label_width = group
            .items
            .iter()
            .map(|i| i.name.width())
            .max()
            .unwrap_or(0);
        for item in &group.items {
            match item.link.as_deref() {
                Some(link) => {
                    let pad = " ".repeat(label_width - item.name.width());
                    out.push_str(&format!("  {}{}  -> {}\n", item.name, pad, link));
                }
                None => {
                    out.push_str(&format!("  {}\n", item.name));
                }
            }
        }
    }
    out
}
