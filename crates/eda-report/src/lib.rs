//! Report output for EDA results.
//!
//! This crate sits at the boundary of the engine:
//!
//! - **Rendering**: [`ChartRenderer`] implementations turn chart descriptors
//!   into artifacts ([`JsonChartWriter`] writes chart series as JSON,
//!   [`NoopRenderer`] only names them)
//! - **Assembly**: [`assemble_report`] collects analysis results and rendered
//!   charts into a [`Report`](eda_model::Report)
//! - **Output**: [`write_report`] writes `report.json`

mod assemble;
mod config;
mod error;
mod render;

pub use assemble::{assemble_report, write_report};
pub use config::ReportConfig;
pub use error::{RenderError, ReportError, Result};
pub use render::{
    ArtifactNames, ChartRenderer, JsonChartWriter, NoopRenderer, artifact_file_name,
};
