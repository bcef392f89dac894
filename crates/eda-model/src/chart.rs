//! Chart descriptors produced by the chart selector.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Pie,
    Bar,
    TimeSeries,
    Scatter,
    Boxplot,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Histogram => "histogram",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::TimeSeries => "time_series",
            Self::Scatter => "scatter",
            Self::Boxplot => "boxplot",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket width for time-series aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Month,
}

/// Target columns and rendering parameters of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Histogram {
        column: String,
        bins: usize,
    },
    /// Full value distribution with percentage labels.
    Pie {
        column: String,
    },
    Bar {
        column: String,
        top_n: usize,
    },
    /// `value_column` summed per bucket of `date_column`, drawn as a line with markers.
    TimeSeries {
        date_column: String,
        value_column: String,
        bucket: TimeBucket,
    },
    Scatter {
        x: String,
        y: String,
    },
    /// `value_column` grouped by the `top_groups` most frequent `group_column` values.
    Boxplot {
        value_column: String,
        group_column: String,
        top_groups: usize,
    },
}

/// An abstract chart: what to draw, decoupled from how it is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub title: String,
    pub spec: ChartSpec,
}

impl ChartDescriptor {
    pub fn new(title: impl Into<String>, spec: ChartSpec) -> Self {
        Self {
            title: title.into(),
            spec,
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self.spec {
            ChartSpec::Histogram { .. } => ChartKind::Histogram,
            ChartSpec::Pie { .. } => ChartKind::Pie,
            ChartSpec::Bar { .. } => ChartKind::Bar,
            ChartSpec::TimeSeries { .. } => ChartKind::TimeSeries,
            ChartSpec::Scatter { .. } => ChartKind::Scatter,
            ChartSpec::Boxplot { .. } => ChartKind::Boxplot,
        }
    }

    /// Columns the chart reads, primary target first.
    pub fn columns(&self) -> Vec<&str> {
        match &self.spec {
            ChartSpec::Histogram { column, .. }
            | ChartSpec::Pie { column }
            | ChartSpec::Bar { column, .. } => vec![column.as_str()],
            ChartSpec::TimeSeries {
                date_column,
                value_column,
                ..
            } => vec![value_column.as_str(), date_column.as_str()],
            ChartSpec::Scatter { x, y } => vec![x.as_str(), y.as_str()],
            ChartSpec::Boxplot {
                value_column,
                group_column,
                ..
            } => vec![value_column.as_str(), group_column.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxplot_lists_value_then_group() {
        let chart = ChartDescriptor::new(
            "Boxplot of amount by region",
            ChartSpec::Boxplot {
                value_column: "amount".to_string(),
                group_column: "region".to_string(),
                top_groups: 6,
            },
        );
        assert_eq!(chart.kind(), ChartKind::Boxplot);
        assert_eq!(chart.columns(), vec!["amount", "region"]);
    }
}
