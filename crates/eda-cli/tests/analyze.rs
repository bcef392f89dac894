//! Integration tests for the `analyze` command.

use std::fs;
use std::path::{Path, PathBuf};

use eda_cli::cli::AnalyzeArgs;
use eda_cli::commands::{report_json, run_analyze};

const ORDERS_CSV: &str = "\
order_date,customer_id,item,total
2023-11-02,C1,pen,3.5
2023-11-15,C2,ink,12
2023-12-01,C1,pad,4
2023-12-20,C3,pen,3.5
2024-01-05,C2,pen,3.5
";

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn args(input: PathBuf, output_dir: PathBuf) -> AnalyzeArgs {
    AnalyzeArgs {
        input,
        output_dir,
        config: None,
        no_render: false,
        no_json: false,
        json: false,
    }
}

#[test]
fn analyze_writes_report_and_charts_under_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "orders.csv", ORDERS_CSV);
    let out = dir.path().join("out");

    let result = run_analyze(&args(input, out.clone())).unwrap();

    assert_eq!(result.output_dir, out.join("orders"));
    assert_eq!(result.report_path, Some(out.join("orders").join("report.json")));
    assert!(out.join("orders/report.json").exists());
    assert!(out.join("orders/charts/histogram_total.json").exists());
    assert!(out.join("orders/charts/time_series_total_order_date.json").exists());
    assert!(!result.has_dropped_charts());

    let report = &result.report;
    assert_eq!(report.source, "orders.csv");
    assert_eq!(report.row_count, 5);
    assert_eq!(report.profiles.temporal_column(), Some("order_date"));
    assert!(report.entities.customers.is_detected());
    assert!(report.entities.products.is_detected());
}

#[test]
fn no_render_and_no_json_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "orders.csv", ORDERS_CSV);
    let out = dir.path().join("out");
    let mut request = args(input, out.clone());
    request.no_render = true;
    request.no_json = true;

    let result = run_analyze(&request).unwrap();

    assert!(result.report_path.is_none());
    assert!(!result.report.charts.is_empty());
    assert!(!out.join("orders").exists());
    let json = report_json(&result.report).unwrap();
    assert!(json.contains("\"source\": \"orders.csv\""));
}

#[test]
fn config_file_overrides_options() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "orders.csv", ORDERS_CSV);
    let config = write_csv(dir.path(), "eda.toml", "histogram_bins = 4\nbar_top_n = 3\n");
    let mut request = args(input, dir.path().join("out"));
    request.config = Some(config);

    let result = run_analyze(&request).unwrap();

    let histogram = fs::read_to_string(
        dir.path()
            .join("out/orders/charts/histogram_total.json"),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&histogram).unwrap();
    assert_eq!(value["data"]["bins"].as_array().unwrap().len(), 4);
    // customer_id has 3 distinct values, so it is a pie regardless of bar_top_n.
    assert!(
        result
            .report
            .charts
            .iter()
            .any(|chart| chart.descriptor.title == "Pie Chart: customer_id")
    );
}

#[test]
fn invalid_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "orders.csv", ORDERS_CSV);
    let config = write_csv(dir.path(), "eda.toml", "histogram_bins = 0\n");
    let mut request = args(input, dir.path().join("out"));
    request.config = Some(config);

    let error = run_analyze(&request).unwrap_err();
    assert!(format!("{error:#}").contains("histogram_bins"));
}

#[test]
fn ragged_csv_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "bad.csv", "a,b\n1,2\n3\n");

    let error = run_analyze(&args(input, dir.path().join("out"))).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("bad.csv"), "{message}");
    assert!(!dir.path().join("out/bad").exists());
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_analyze(&args(dir.path().join("nope.csv"), dir.path().join("out")));
    assert!(result.is_err());
}
