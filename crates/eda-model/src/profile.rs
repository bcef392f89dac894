//! Column classification results.

use serde::{Deserialize, Serialize};

/// Semantic kind assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Temporal,
    /// Storage type matched neither numeric nor categorical (booleans, nulls, nested).
    Unclassified,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Temporal => "temporal",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Storage type as reported by the dataframe (e.g. `i64`, `str`).
    pub dtype: String,
    pub kind: ColumnKind,
    /// Distinct non-missing values.
    pub cardinality: usize,
    pub missing_count: usize,
}

/// A date/time-named column that could not be parsed as timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalRejection {
    pub column: String,
    pub reason: String,
}

/// Outcome of temporal detection: the selected column, if any, and why the
/// other name-matching candidates were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalDetection {
    pub column: Option<String>,
    pub rejected: Vec<TemporalRejection>,
}

/// Profiles for every column of a table, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfiles {
    profiles: Vec<ColumnProfile>,
    temporal: TemporalDetection,
}

impl ColumnProfiles {
    pub fn new(profiles: Vec<ColumnProfile>, temporal: TemporalDetection) -> Self {
        Self { profiles, temporal }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.profiles.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnProfile> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    /// Column names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Profiles of the given kind, in table order.
    pub fn of_kind(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnProfile> {
        self.profiles.iter().filter(move |profile| profile.kind == kind)
    }

    pub fn numeric(&self) -> Vec<&ColumnProfile> {
        self.of_kind(ColumnKind::Numeric).collect()
    }

    pub fn categorical(&self) -> Vec<&ColumnProfile> {
        self.of_kind(ColumnKind::Categorical).collect()
    }

    pub fn has_numeric(&self) -> bool {
        self.of_kind(ColumnKind::Numeric).next().is_some()
    }

    pub fn has_categorical(&self) -> bool {
        self.of_kind(ColumnKind::Categorical).next().is_some()
    }

    /// Name of the single temporal column, if one was detected.
    pub fn temporal_column(&self) -> Option<&str> {
        self.temporal.column.as_deref()
    }

    pub fn temporal_detection(&self) -> &TemporalDetection {
        &self.temporal
    }
}
