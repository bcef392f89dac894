use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use eda_core::analyze;
use eda_ingest::load_table;
use eda_model::{AnalysisOptions, Report, load_options};
use eda_report::{
    ChartRenderer, JsonChartWriter, NoopRenderer, ReportConfig, assemble_report, write_report,
};

use crate::cli::AnalyzeArgs;

const CHARTS_DIR: &str = "charts";

/// Outcome of `eda analyze`.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub report: Report,
    /// Per-dataset output folder.
    pub output_dir: PathBuf,
    /// Path of `report.json`, when written.
    pub report_path: Option<PathBuf>,
}

impl AnalyzeResult {
    pub fn has_dropped_charts(&self) -> bool {
        !self.report.dropped_charts.is_empty()
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn analysis_options(config: Option<&Path>) -> Result<AnalysisOptions> {
    match config {
        Some(path) => {
            load_options(path).with_context(|| format!("load options from {}", path.display()))
        }
        None => Ok(AnalysisOptions::default()),
    }
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let source = source_name(&args.input);
    let file_span = info_span!("file", source = %source);
    let _file_guard = file_span.enter();

    let options = analysis_options(args.config.as_deref())?;
    let report_config = ReportConfig {
        output_dir: args.output_dir.clone(),
        render_charts: !args.no_render,
        write_json: !args.no_json,
    };
    let output_dir = report_config.dataset_dir(&args.input);

    let df = info_span!("load")
        .in_scope(|| load_table(&args.input))
        .with_context(|| format!("load {}", args.input.display()))?;
    info!(rows = df.height(), columns = df.width(), "table loaded");

    let analysis = analyze(df, &options).context("analyze table")?;

    let charts_dir = output_dir.join(CHARTS_DIR);
    let renderer: Box<dyn ChartRenderer> = if report_config.render_charts {
        Box::new(JsonChartWriter::new(charts_dir))
    } else {
        debug!("chart rendering disabled");
        Box::new(NoopRenderer::new(charts_dir))
    };
    let report =
        info_span!("render").in_scope(|| assemble_report(analysis, source, renderer.as_ref()));

    let report_path = if report_config.write_json {
        let path = write_report(&report, &output_dir)
            .with_context(|| format!("write report to {}", output_dir.display()))?;
        Some(path)
    } else {
        None
    };

    Ok(AnalyzeResult {
        report,
        output_dir,
        report_path,
    })
}

/// Report as pretty JSON, for `--json`.
pub fn report_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("encode report")
}
