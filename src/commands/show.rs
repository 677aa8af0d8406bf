use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use navmenu::{group_entries, load_entries, render_groups, Group, MenuEntry};

pub fn cmd_show(file: &Path, all: bool, json: bool) -> Result<()> {
    let entries = load_entries(file)?;
    let groups = group_entries(&entries);

    if json {
        let payload = serde_json::json!({
            "command": "show",
            "file": file,
            "groups": groups,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", render_groups(&groups, &entries));

    if all {
        let hidden = hidden_entries(&entries, &groups);
        if !hidden.is_empty() {
            println!();
            println!("hidden entries:");
            for (entry, reason) in hidden {
                println!("  {} ({})", entry.name, reason);
            }
        }
    }

    Ok(())
}

/// Entries from the input that the grouping rules kept out of the output,
/// with the rule that dropped each one.
fn hidden_entries<'a>(
    entries: &'a [MenuEntry],
    groups: &[Group],
) -> Vec<(&'a MenuEntry, String)> {
    let attached_ids: HashSet<u64> = groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.id))
        .collect();

    entries
        .iter()
        .filter_map(|entry| {
            if !entry.is_active {
                return Some((entry, "inactive".to_string()));
            }
            match entry.parent_name() {
                Some(category) if !attached_ids.contains(&entry.id) => {
                    Some((entry, format!("parent '{category}' is inactive")))
                }
                _ => None,
            }
        })
        .collect()
}
