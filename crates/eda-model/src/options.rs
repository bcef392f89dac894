//! Tunable parameters for one analysis pass.
//!
//! Defaults reproduce the fixed report layout: 10 histogram bins, pie charts
//! for 2 to 6 distinct values, top-10 bar charts, top-6 boxplot groups, top-5
//! category tables and top-10 entity tables. Keyword lists for entity
//! detection are deliberately not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// Options controlling classification, statistics and chart parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Number of equal-width bins per histogram.
    pub histogram_bins: usize,
    /// Smallest distinct-value count that still gets a pie chart.
    pub pie_min_distinct: usize,
    /// Largest distinct-value count that still gets a pie chart.
    pub pie_max_distinct: usize,
    /// Number of values shown in a bar chart.
    pub bar_top_n: usize,
    /// Number of most frequent groups kept for the boxplot.
    pub boxplot_top_groups: usize,
    /// Number of values listed per categorical column in the statistics.
    pub category_top_n: usize,
    /// Number of rows in entity frequency and amount tables.
    pub entity_top_n: usize,
    /// Number of rows included in the table preview.
    pub preview_rows: usize,
    /// chrono format strings tried, in order, during temporal detection.
    pub temporal_formats: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            pie_min_distinct: 2,
            pie_max_distinct: 6,
            bar_top_n: 10,
            boxplot_top_groups: 6,
            category_top_n: 5,
            entity_top_n: 10,
            preview_rows: 10,
            temporal_formats: default_temporal_formats(),
        }
    }
}

fn default_temporal_formats() -> Vec<String> {
    [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d/%m/%Y",
        "%m/%d/%Y %H:%M",
        "%d.%m.%Y",
        "%Y%m%d",
    ]
    .iter()
    .map(|format| (*format).to_string())
    .collect()
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `distinct` falls inside the pie-chart range (inclusive).
    pub fn is_pie_eligible(&self, distinct: usize) -> bool {
        (self.pie_min_distinct..=self.pie_max_distinct).contains(&distinct)
    }

    #[must_use]
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    #[must_use]
    pub fn with_temporal_formats(mut self, formats: Vec<String>) -> Self {
        self.temporal_formats = formats;
        self
    }

    /// Parses options from TOML text; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self> {
        let options: Self = toml::from_str(contents).map_err(|source| OptionsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects option combinations that would make chart selection meaningless.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("histogram_bins", self.histogram_bins),
            ("bar_top_n", self.bar_top_n),
            ("boxplot_top_groups", self.boxplot_top_groups),
            ("category_top_n", self.category_top_n),
            ("entity_top_n", self.entity_top_n),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(OptionsError::Invalid {
                    field,
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if self.pie_min_distinct > self.pie_max_distinct {
            return Err(OptionsError::Invalid {
                field: "pie_min_distinct",
                message: format!(
                    "{} is greater than pie_max_distinct {}",
                    self.pie_min_distinct, self.pie_max_distinct
                ),
            });
        }
        if self.temporal_formats.is_empty() {
            return Err(OptionsError::Invalid {
                field: "temporal_formats",
                message: "at least one format is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads analysis options from a TOML file.
pub fn load_options(path: &Path) -> Result<AnalysisOptions> {
    let contents = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    AnalysisOptions::from_toml_str(&contents, path)
}
