//! Error types for navmenu
//!
//! The grouping engine itself is total and never errors; everything here
//! belongs to the menu-file loading boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navmenu operations
pub type NavMenuResult<T> = Result<T, NavMenuError>;

/// Main error type for navmenu operations
#[derive(Error, Debug)]
pub enum NavMenuError {
    /// Menu file could not be read
    #[error("failed to read menu file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a recognized menu format
    #[error("unsupported menu format '.{extension}' for {path} - expected .json, .yml or .yaml")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// JSON parsing error
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing error
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
