//! Error types for the analysis engine.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that abort an analysis pass or a chart materialization.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),

    #[error("column '{column}' is not numeric (type {dtype})")]
    NotNumeric { column: String, dtype: String },

    #[error("column '{column}' holds no timestamps (type {dtype})")]
    NotTemporal { column: String, dtype: String },
}

/// Why a date/time-named column was not accepted as the temporal column.
#[derive(Debug, Error)]
pub enum TemporalParseError {
    #[error("numeric column (type {dtype}); epoch numbers are not read as timestamps")]
    Numeric { dtype: String },

    #[error("type {dtype} cannot hold timestamps")]
    Unsupported { dtype: String },

    #[error("column has no values")]
    Empty,

    #[error("value '{value}' does not match any timestamp format")]
    Unparseable { value: String },

    #[error("no single timestamp format matches every value")]
    MixedFormats,

    #[error("conversion failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
