//! Integration tests for report assembly and output.

use std::path::Path;

use polars::prelude::DataFrame;

use eda_core::analyze;
use eda_ingest::load_table_from_bytes;
use eda_model::{AnalysisOptions, ArtifactRef, ChartDescriptor, ChartKind};
use eda_report::{
    ChartRenderer, JsonChartWriter, RenderError, assemble_report, write_report,
};

const CSV: &str = "\
signup_date,plan,seats,revenue
2024-05-01,basic,3,30
2024-05-19,pro,10,250
2024-06-02,basic,1,10
2024-06-30,team,25,600
";

fn analysis() -> eda_core::Analysis {
    let df = load_table_from_bytes(CSV.as_bytes().to_vec(), Path::new("plans.csv")).unwrap();
    analyze(df, &AnalysisOptions::default()).unwrap()
}

/// Fails on scatter plots, names everything else.
struct FlakyRenderer;

impl ChartRenderer for FlakyRenderer {
    fn render(
        &self,
        chart: &ChartDescriptor,
        _df: &DataFrame,
    ) -> Result<ArtifactRef, RenderError> {
        if chart.kind() == ChartKind::Scatter {
            return Err(RenderError::Write {
                path: "scatter.json".into(),
                source: std::io::Error::other("disk full"),
            });
        }
        Ok(ArtifactRef(format!("{}.json", chart.kind()).into()))
    }
}

#[test]
fn failing_chart_is_dropped_and_others_kept() {
    let analysis = analysis();
    let selected = analysis.charts.len();
    let report = assemble_report(analysis, "plans.csv", &FlakyRenderer);

    assert_eq!(report.dropped_charts.len(), 1);
    assert_eq!(report.dropped_charts[0].title, "Scatter Plot: seats vs revenue");
    assert!(report.dropped_charts[0].reason.contains("disk full"));
    assert_eq!(report.charts.len(), selected - 1);
    assert!(
        report
            .charts
            .iter()
            .all(|chart| chart.descriptor.kind() != ChartKind::Scatter)
    );
}

#[test]
fn json_writer_produces_one_file_per_chart() {
    let dir = tempfile::tempdir().unwrap();
    let writer = JsonChartWriter::new(dir.path().join("charts"));
    let report = assemble_report(analysis(), "plans.csv", &writer);

    assert!(report.dropped_charts.is_empty());
    for chart in &report.charts {
        assert!(chart.artifact.path().exists(), "{}", chart.descriptor.title);
    }

    let histogram = dir.path().join("charts").join("histogram_seats.json");
    let contents = std::fs::read_to_string(histogram).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["title"], "Histogram of seats");
    assert_eq!(value["data"]["kind"], "histogram");
    assert_eq!(value["data"]["bins"].as_array().unwrap().len(), 10);
}

#[test]
fn report_json_round_trips_core_fields() {
    let dir = tempfile::tempdir().unwrap();
    let report = assemble_report(analysis(), "plans.csv", &FlakyRenderer);
    let path = write_report(&report, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("report.json"));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["schema"], "eda.report");
    assert_eq!(value["source"], "plans.csv");
    assert_eq!(value["row_count"], 4);
    assert_eq!(value["entities"]["customers"]["status"], "not_detected");
    assert_eq!(value["entities"]["products"]["status"], "not_detected");
    assert_eq!(value["recommendations"][0], "review_histograms");
}
