//! Error types for chart rendering and report output.

use std::path::PathBuf;

use thiserror::Error;

use eda_core::CoreError;

/// Failure rendering a single chart. Never aborts the report.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot compute chart series: {0}")]
    Series(#[from] CoreError),

    #[error("failed to write chart {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode chart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure writing the report itself.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
