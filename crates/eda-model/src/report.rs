//! The assembled report handed to presenters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::ChartDescriptor;
use crate::entity::EntityAnalysis;
use crate::profile::ColumnProfiles;
use crate::recommendation::Recommendation;
use crate::stats::Statistics;

/// Opaque handle to a rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(pub PathBuf);

impl ArtifactRef {
    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

/// First rows of the table rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedChart {
    pub descriptor: ChartDescriptor,
    pub artifact: ArtifactRef,
}

/// A selected chart that failed to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedChart {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the analysed input (file name or caller-supplied label).
    pub source: String,
    pub row_count: usize,
    pub column_count: usize,
    pub preview: TablePreview,
    pub profiles: ColumnProfiles,
    pub statistics: Statistics,
    pub charts: Vec<RenderedChart>,
    pub dropped_charts: Vec<DroppedChart>,
    pub entities: EntityAnalysis,
    pub recommendations: Vec<Recommendation>,
}
