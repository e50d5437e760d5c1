//! Typed errors for the dashboard.
//!
//! - `GridError`: header and row addressing against a column set
//! - `LookupError`: record and user resolution against the fixtures
//! - `ConfigError`: reading, parsing and writing `quality.toml`
//!
//! Commands return `anyhow::Result` and attach context; these enums stay
//! matchable underneath.

use qiq_common::DomainError;
use thiserror::Error;

/// Errors from driving a grid by column label or row number.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Unknown column '{column}'. Available: {available}")]
    UnknownColumn { column: String, available: String },

    #[error("Column '{column}' is derived and cannot be sorted. Sortable: {sortable}")]
    NotSortable { column: String, sortable: String },

    #[error("Row {row} is out of range (grid has {count} rows)")]
    RowOutOfRange { row: usize, count: usize },
}

/// Errors from resolving ids against the loaded data set.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No {kind} with id '{id}'")]
    UnknownRecord { kind: &'static str, id: String },

    #[error("Unknown user '{id}'. Set [session] user_id or QIQ_USER to one of: {known}")]
    UnknownUser { id: String, known: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors from the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    WriteFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse quality.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize quality.toml: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file already exists at {0}")]
    AlreadyExists(std::path::PathBuf),
}
