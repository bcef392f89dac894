//! Greedy chart selection.
//!
//! Selection looks only at column profiles, never at values. Every rule takes
//! the first matching columns in table order; there is no scoring.

use tracing::debug;

use eda_model::{AnalysisOptions, ChartDescriptor, ChartSpec, ColumnProfile, ColumnProfiles, TimeBucket};

/// Chooses the charts for a table, in report order.
///
/// Histograms come first, then one pie or bar per categorical column (all
/// pies before all bars), then at most one time series, one scatter plot and
/// one boxplot.
pub fn select_charts(profiles: &ColumnProfiles, options: &AnalysisOptions) -> Vec<ChartDescriptor> {
    let numeric = profiles.numeric();
    let categorical = profiles.categorical();
    let mut charts = Vec::new();

    for profile in &numeric {
        charts.push(ChartDescriptor::new(
            format!("Histogram of {}", profile.name),
            ChartSpec::Histogram {
                column: profile.name.clone(),
                bins: options.histogram_bins,
            },
        ));
    }

    let (pies, bars): (Vec<&&ColumnProfile>, Vec<_>) = categorical
        .iter()
        .partition(|profile| options.is_pie_eligible(profile.cardinality));
    for profile in pies {
        charts.push(ChartDescriptor::new(
            format!("Pie Chart: {}", profile.name),
            ChartSpec::Pie {
                column: profile.name.clone(),
            },
        ));
    }
    for profile in bars {
        charts.push(ChartDescriptor::new(
            format!("Top {} Values: {}", options.bar_top_n, profile.name),
            ChartSpec::Bar {
                column: profile.name.clone(),
                top_n: options.bar_top_n,
            },
        ));
    }

    if let (Some(date), Some(value)) = (profiles.temporal_column(), numeric.first()) {
        charts.push(ChartDescriptor::new(
            format!("{} by Month", value.name),
            ChartSpec::TimeSeries {
                date_column: date.to_string(),
                value_column: value.name.clone(),
                bucket: TimeBucket::Month,
            },
        ));
    }

    if let [x, y, ..] = numeric.as_slice() {
        charts.push(ChartDescriptor::new(
            format!("Scatter Plot: {} vs {}", x.name, y.name),
            ChartSpec::Scatter {
                x: x.name.clone(),
                y: y.name.clone(),
            },
        ));
    }

    if let (Some(value), Some(group)) = (numeric.first(), categorical.first()) {
        charts.push(ChartDescriptor::new(
            format!("Boxplot of {} by {}", value.name, group.name),
            ChartSpec::Boxplot {
                value_column: value.name.clone(),
                group_column: group.name.clone(),
                top_groups: options.boxplot_top_groups,
            },
        ));
    }

    debug!(count = charts.len(), "charts selected");
    charts
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::{ChartKind, ColumnKind, ColumnProfile, TemporalDetection};

    fn profile(name: &str, kind: ColumnKind, cardinality: usize) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            dtype: String::new(),
            kind,
            cardinality,
            missing_count: 0,
        }
    }

    fn titles(charts: &[ChartDescriptor]) -> Vec<&str> {
        charts.iter().map(|chart| chart.title.as_str()).collect()
    }

    #[test]
    fn pies_precede_bars_regardless_of_table_order() {
        let profiles = ColumnProfiles::new(
            vec![
                profile("city", ColumnKind::Categorical, 40),
                profile("segment", ColumnKind::Categorical, 3),
                profile("store", ColumnKind::Categorical, 12),
                profile("channel", ColumnKind::Categorical, 2),
            ],
            TemporalDetection::default(),
        );
        let charts = select_charts(&profiles, &AnalysisOptions::default());
        assert_eq!(
            titles(&charts),
            vec![
                "Pie Chart: segment",
                "Pie Chart: channel",
                "Top 10 Values: city",
                "Top 10 Values: store",
            ]
        );
    }

    #[test]
    fn single_valued_category_gets_a_bar() {
        let profiles = ColumnProfiles::new(
            vec![profile("country", ColumnKind::Categorical, 1)],
            TemporalDetection::default(),
        );
        let charts = select_charts(&profiles, &AnalysisOptions::default());
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].kind(), ChartKind::Bar);
    }

    #[test]
    fn full_layout_uses_first_columns() {
        let profiles = ColumnProfiles::new(
            vec![
                profile("sold_at_date", ColumnKind::Temporal, 30),
                profile("qty", ColumnKind::Numeric, 9),
                profile("region", ColumnKind::Categorical, 4),
                profile("price", ColumnKind::Numeric, 20),
                profile("discount", ColumnKind::Numeric, 5),
            ],
            TemporalDetection {
                column: Some("sold_at_date".to_string()),
                rejected: Vec::new(),
            },
        );
        let charts = select_charts(&profiles, &AnalysisOptions::default());
        assert_eq!(
            titles(&charts),
            vec![
                "Histogram of qty",
                "Histogram of price",
                "Histogram of discount",
                "Pie Chart: region",
                "qty by Month",
                "Scatter Plot: qty vs price",
                "Boxplot of qty by region",
            ]
        );
        assert_eq!(
            charts[4].spec,
            ChartSpec::TimeSeries {
                date_column: "sold_at_date".to_string(),
                value_column: "qty".to_string(),
                bucket: TimeBucket::Month,
            }
        );
    }

    #[test]
    fn unclassified_columns_get_no_chart() {
        let profiles = ColumnProfiles::new(
            vec![profile("flag", ColumnKind::Unclassified, 2)],
            TemporalDetection::default(),
        );
        assert!(select_charts(&profiles, &AnalysisOptions::default()).is_empty());
    }
}
