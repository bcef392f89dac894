//! CSV header normalization and checks.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Header row and record count of a CSV input.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
    /// Number of data records after the header.
    pub row_count: usize,
}

impl CsvHeaders {
    /// Builds headers from raw header cells, normalizing every name.
    pub fn new<'a>(raw: impl IntoIterator<Item = &'a str>, row_count: usize) -> Self {
        Self {
            columns: raw.into_iter().map(normalize_header).collect(),
            row_count,
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Ensures every column has a non-empty, unique name.
    pub fn validate(&self, path: &Path) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for (index, column) in self.columns.iter().enumerate() {
            if column.is_empty() {
                return Err(IngestError::EmptyColumnName {
                    path: path.to_path_buf(),
                    index,
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(IngestError::DuplicateColumn {
                    path: path.to_path_buf(),
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Drops a leading BOM and surrounding whitespace; inner spacing is kept.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}
