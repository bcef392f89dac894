//! Chart renderers.
//!
//! A renderer turns one [`ChartDescriptor`] into an artifact and returns a
//! reference to it. [`JsonChartWriter`] writes the chart series as JSON for an
//! external plotting front end; [`NoopRenderer`] only computes the name.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use eda_core::{ChartData, chart_data};
use eda_model::{ArtifactRef, ChartDescriptor, ChartSpec};

use crate::error::RenderError;

/// Renders one chart from the analysed table.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartDescriptor, df: &DataFrame)
    -> Result<ArtifactRef, RenderError>;
}

fn artifact_stem(chart: &ChartDescriptor) -> String {
    std::iter::once(chart.kind().as_str())
        .chain(chart.columns())
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name for a chart artifact: `<kind>_<columns>.json`.
///
/// Characters other than ASCII letters, digits, `-` and `_` become `_`, so
/// distinct charts can share a name; renderers claim names through
/// [`ArtifactNames`] to keep them apart.
pub fn artifact_file_name(chart: &ChartDescriptor) -> String {
    format!("{}.json", artifact_stem(chart))
}

/// Artifact names handed out by one renderer.
///
/// A name that is already taken (compared case-insensitively) gets a
/// numeric suffix: `histogram_a_b.json`, then `histogram_a_b_2.json`.
#[derive(Debug, Default)]
pub struct ArtifactNames {
    taken: Mutex<HashSet<String>>,
}

impl ArtifactNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a file name for `chart` that no earlier claim returned.
    pub fn claim(&self, chart: &ChartDescriptor) -> String {
        let stem = artifact_stem(chart);
        let mut taken = self.taken.lock().unwrap_or_else(PoisonError::into_inner);
        let mut name = stem.clone();
        let mut suffix = 2;
        while !taken.insert(name.to_lowercase()) {
            name = format!("{stem}_{suffix}");
            suffix += 1;
        }
        format!("{name}.json")
    }
}

#[derive(Serialize)]
struct ChartArtifact<'a> {
    title: &'a str,
    spec: &'a ChartSpec,
    data: ChartData,
}

/// Writes chart series as pretty JSON files into one directory.
#[derive(Debug)]
pub struct JsonChartWriter {
    dir: PathBuf,
    names: ArtifactNames,
}

impl JsonChartWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            names: ArtifactNames::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ChartRenderer for JsonChartWriter {
    fn render(
        &self,
        chart: &ChartDescriptor,
        df: &DataFrame,
    ) -> Result<ArtifactRef, RenderError> {
        let artifact = ChartArtifact {
            title: &chart.title,
            spec: &chart.spec,
            data: chart_data(chart, df)?,
        };
        let json = serde_json::to_string_pretty(&artifact)?;

        std::fs::create_dir_all(&self.dir).map_err(|source| RenderError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(self.names.claim(chart));
        std::fs::write(&path, format!("{json}\n")).map_err(|source| RenderError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(chart = %chart.title, path = %path.display(), "chart written");
        Ok(ArtifactRef(path))
    }
}

/// Names artifacts without computing or writing anything.
#[derive(Debug)]
pub struct NoopRenderer {
    dir: PathBuf,
    names: ArtifactNames,
}

impl NoopRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            names: ArtifactNames::new(),
        }
    }
}

impl ChartRenderer for NoopRenderer {
    fn render(
        &self,
        chart: &ChartDescriptor,
        _df: &DataFrame,
    ) -> Result<ArtifactRef, RenderError> {
        Ok(ArtifactRef(self.dir.join(self.names.claim(chart))))
    }
}
