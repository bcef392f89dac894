//! Descriptive statistics for one table.

use serde::{Deserialize, Serialize};

/// Describe-style summary of a numeric column, rounded to 2 decimals.
///
/// Every field except `count` is `None` when the column holds no values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// One value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Most frequent values of a categorical column, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFrequencies {
    pub column: String,
    pub top: Vec<ValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Output of the statistics summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// `None` when the table has no numeric columns at all.
    pub numeric: Option<Vec<NumericSummary>>,
    pub categorical: Vec<CategoryFrequencies>,
    /// One entry per column, in table order.
    pub missing: Vec<MissingCount>,
}

impl Statistics {
    pub fn missing_for(&self, column: &str) -> Option<usize> {
        self.missing
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.missing)
    }

    pub fn categorical_for(&self, column: &str) -> Option<&CategoryFrequencies> {
        self.categorical.iter().find(|entry| entry.column == column)
    }
}
