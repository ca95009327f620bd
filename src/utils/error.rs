//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while aggregating totals or answering tooltip queries.
///
/// All of these are precondition violations on the row table, never
/// transient conditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareError {
    #[error("Share table has no rows")]
    EmptyTable,

    #[error("Row {row} references parent '{parent}' which is not a registered category")]
    UnregisteredParent { row: usize, parent: String },

    #[error("Row index {row} is out of range (table has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },
}

/// Errors that can occur while loading a share table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Table contains no data rows")]
    Empty,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while handing a table to the treemap library
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Treemap library is not ready; wait for it to load before rendering")]
    LibraryNotReady,

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error("Treemap library failed to draw: {0}")]
    Draw(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
