//! Core data models for navmenu
//!
//! Defines the fundamental data structures used throughout navmenu:
//! - `MenuEntry`: a single flat navigation-menu record from the content listing
//! - `Group`: a derived two-level grouping produced for rendering

use serde::{Deserialize, Serialize};

/// A single navigation-menu record.
///
/// `name` doubles as the joining key for grouping: children reference their
/// parent through `category == parent.name`, not through an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Unique identifier
    pub id: u64,

    /// Display label; also the grouping key when this entry heads a group
    pub name: String,

    /// Parent entry's `name`. Absent or blank means this entry is itself a
    /// potential parent ("defined parent").
    #[serde(default)]
    pub category: Option<String>,

    /// Direct navigation target, used only when a parent group has no children
    #[serde(default)]
    pub link: Option<String>,

    /// Whether the entry is currently visible
    pub is_active: bool,

    /// Sort ordering among siblings and among groups
    pub display_order: i32,
}

impl MenuEntry {
    /// Create an active entry with no category and no link.
    pub fn new(id: u64, name: impl Into<String>, display_order: i32) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            link: None,
            is_active: true,
            display_order,
        }
    }

    /// Set the parent reference.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the navigation target.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set visibility.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Normalized parent reference.
    ///
    /// `None` when the category is absent or blank, i.e. when this entry is a
    /// defined parent. The returned name is the raw category value; only the
    /// emptiness check is whitespace-insensitive.
    pub fn parent_name(&self) -> Option<&str> {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => Some(c),
            _ => None,
        }
    }

    /// Whether this entry is eligible to head a group.
    pub fn is_defined_parent(&self) -> bool {
        self.parent_name().is_none()
    }
}

/// A derived group of menu entries for rendering.
///
/// Transient: recomputed from the flat entry list on every input change and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group display name; equals the heading parent's `name`, or the shared
    /// `category` value for implicit orphan groups
    pub name: String,

    /// Attached child entries, sorted by `display_order`
    pub items: Vec<MenuEntry>,

    /// Sort ordering among groups
    pub display_order: i32,
}

impl Group {
    /// Create an empty group.
    pub fn new(name: impl Into<String>, display_order: i32) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            display_order,
        }
    }

    /// Whether the renderer should fall back to the parent's own `link`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
