//! Shared data model for the EDA engine.
//!
//! Everything the analysis produces for one table lives here: column
//! profiles, statistics, chart descriptors, entity roles, recommendations
//! and the assembled [`Report`]. All types are plain data and serialize with
//! `serde` so the report can be written as JSON.

pub mod chart;
pub mod entity;
pub mod error;
pub mod options;
pub mod profile;
pub mod recommendation;
pub mod report;
pub mod stats;

pub use chart::{ChartDescriptor, ChartKind, ChartSpec, TimeBucket};
pub use entity::{AmountRanking, EntityAnalysis, EntityFragment, EntityRoles, RankedValue};
pub use error::{OptionsError, Result};
pub use options::{AnalysisOptions, load_options};
pub use profile::{ColumnKind, ColumnProfile, ColumnProfiles, TemporalDetection, TemporalRejection};
pub use recommendation::Recommendation;
pub use report::{ArtifactRef, DroppedChart, RenderedChart, Report, TablePreview};
pub use stats::{CategoryFrequencies, MissingCount, NumericSummary, Statistics, ValueCount};
