//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make an input unusable as a table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding the loader does not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Shape Errors ===
    /// CSV input has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A header cell is blank.
    #[error("column {index} has an empty name in {path}")]
    EmptyColumnName { path: PathBuf, index: usize },

    /// Two header cells share a name.
    #[error("duplicate column '{column}' in {path}")]
    DuplicateColumn { path: PathBuf, column: String },

    /// A record does not have as many fields as the header.
    #[error("line {line} of {path} has {found} fields, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
