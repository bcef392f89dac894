//! Table loading for the EDA engine.
//!
//! This crate turns raw CSV input (a file on disk or an uploaded byte
//! buffer) into a Polars [`DataFrame`](polars::prelude::DataFrame). Input is
//! rejected before any analysis runs when it cannot be read as a rectangular
//! table:
//!
//! - **Size**: files above [`MAX_CSV_FILE_SIZE`] are refused
//! - **Encoding**: UTF-16 byte-order marks are refused
//! - **Shape**: every record must have as many fields as the header
//! - **Header**: column names must be non-empty and unique
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eda_ingest::load_table;
//!
//! let df = load_table(Path::new("sales.csv"))?;
//! println!("{} rows x {} columns", df.height(), df.width());
//! ```

mod table;
mod error;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{
    CsvHeaders, MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size, check_file_size_with_limit, load_table,
    load_table_from_bytes, read_csv_schema, validate_encoding,
};

// === Value Helpers ===
pub use values::{any_to_string, format_numeric};
