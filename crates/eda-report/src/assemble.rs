//! Report assembly and JSON output.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use eda_core::Analysis;
use eda_model::{DroppedChart, RenderedChart, Report};

use crate::error::{ReportError, Result};
use crate::render::ChartRenderer;

const REPORT_SCHEMA: &str = "eda.report";
const REPORT_SCHEMA_VERSION: u32 = 1;
const REPORT_FILE_NAME: &str = "report.json";

/// Renders every selected chart once and collects the report.
///
/// A chart that fails to render is logged, listed in `dropped_charts` and
/// left out of `charts`; the remaining charts are unaffected.
pub fn assemble_report(
    analysis: Analysis,
    source: impl Into<String>,
    renderer: &dyn ChartRenderer,
) -> Report {
    let mut charts = Vec::with_capacity(analysis.charts.len());
    let mut dropped_charts = Vec::new();
    for descriptor in analysis.charts {
        match renderer.render(&descriptor, &analysis.table) {
            Ok(artifact) => charts.push(RenderedChart {
                descriptor,
                artifact,
            }),
            Err(error) => {
                warn!(chart = %descriptor.title, %error, "chart dropped");
                dropped_charts.push(DroppedChart {
                    title: descriptor.title,
                    reason: error.to_string(),
                });
            }
        }
    }

    Report {
        source: source.into(),
        row_count: analysis.table.height(),
        column_count: analysis.table.width(),
        preview: analysis.preview,
        profiles: analysis.profiles,
        statistics: analysis.statistics,
        charts,
        dropped_charts,
        entities: analysis.entities,
        recommendations: analysis.recommendations,
    }
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    #[serde(flatten)]
    report: &'a Report,
}

/// Writes `report.json` into `output_dir` and returns its path.
pub fn write_report(report: &Report, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let output_path = output_dir.join(REPORT_FILE_NAME);
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        report,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n")).map_err(|source| ReportError::Write {
        path: output_path.clone(),
        source,
    })?;
    info!(path = %output_path.display(), "report written");
    Ok(output_path)
}
