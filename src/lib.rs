//! navmenu - navigation-menu grouping engine
//!
//! Transforms a flat, unordered list of navigation-menu entries into an
//! ordered two-level tree of groups for display, honoring active/inactive
//! visibility and orphan handling. Ships with a file loader for JSON/YAML
//! menu definitions, a plain-text renderer, and a validation pass.

pub mod error;
pub mod grouping;
pub mod lint;
pub mod models;
pub mod render;
pub mod source;

// Re-exports for convenience
pub use error::{NavMenuError, NavMenuResult};
pub use grouping::{group_entries, ORPHAN_SORT_ORDER};
pub use lint::{check_entries, Finding, MenuReport, Severity};
pub use models::{Group, MenuEntry};
pub use render::{fallback_link, render_groups};
pub use source::load_entries;
