//! Menu-file loading
//!
//! File-backed stand-in for the content-listing service: reads the full flat
//! entry list (active and inactive) from a JSON or YAML file. The format is
//! selected by file extension. Loading is the only fallible step in the
//! pipeline; the grouping engine never sees broken data.

use std::path::Path;

use crate::error::{NavMenuError, NavMenuResult};
use crate::models::MenuEntry;

/// Supported menu-file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuFormat {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> NavMenuResult<MenuFormat> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match extension {
        "json" => Ok(MenuFormat::Json),
        "yml" | "yaml" => Ok(MenuFormat::Yaml),
        _ => Err(NavMenuError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        }),
    }
}

/// Load a flat menu entry list from a JSON or YAML file.
pub fn load_entries(path: &Path) -> NavMenuResult<Vec<MenuEntry>> {
    let format = detect_format(path)?;
    let raw = std::fs::read_to_string(path).map_err(|source| NavMenuError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        MenuFormat::Json => serde_json::from_str(&raw).map_err(|source| NavMenuError::Json {
            path: path.to_path_buf(),
            source,
        }),
        MenuFormat::Yaml => serde_yaml_ng::from_str(&raw).map_err(|source| NavMenuError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}
