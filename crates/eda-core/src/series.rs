//! Materialized chart series.
//!
//! Renderers receive a [`ChartDescriptor`] plus the table; these functions
//! turn the two into the numbers that actually get drawn.

use polars::prelude::{
    Column, DataFrame, DataType, Float64Chunked, IntoLazy, NewChunkedArray, PlSmallStr,
    SortMultipleOptions, col,
};
use serde::{Deserialize, Serialize};

use eda_model::{ChartDescriptor, ChartSpec, ValueCount};

use crate::error::{CoreError, Result};
use crate::frame::{
    is_numeric_dtype, is_temporal_dtype, numeric_values, text_values, timestamp_dtype,
    value_counts,
};
use crate::stats::quartiles;

const DATE: &str = "date";
const YEAR: &str = "year";
const MONTH: &str = "month";
const TOTAL: &str = "total";

/// One equal-width histogram bin; the last bin includes its upper edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of non-missing values, one decimal.
    pub percent: f64,
}

/// Sum of a value column over one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Five-number summary of one boxplot group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Drawable data for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    Histogram { bins: Vec<HistogramBin> },
    Pie { slices: Vec<PieSlice> },
    Bar { bars: Vec<ValueCount> },
    TimeSeries { points: Vec<MonthlyTotal> },
    Scatter { points: Vec<ScatterPoint> },
    Boxplot { groups: Vec<BoxGroup> },
}

/// Splits present values into `bins` equal-width bins over `[min, max]`.
///
/// A constant column is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }
    let width = (max - min) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in finite {
        let index = ((value - min) / width).floor() as usize;
        counts[index.min(bins - 1)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| HistogramBin {
            start: min + width * index as f64,
            end: if index + 1 == bins {
                max
            } else {
                min + width * (index + 1) as f64
            },
            count,
        })
        .collect()
}

/// Sums a numeric column per calendar month, oldest month first.
///
/// Rows without a date are skipped; a missing value adds nothing.
pub fn monthly_totals(dates: &Column, values: &Column) -> Result<Vec<MonthlyTotal>> {
    if !is_temporal_dtype(dates.dtype()) {
        return Err(CoreError::NotTemporal {
            column: dates.name().to_string(),
            dtype: dates.dtype().to_string(),
        });
    }
    if !is_numeric_dtype(values.dtype()) {
        return Err(CoreError::NotNumeric {
            column: values.name().to_string(),
            dtype: values.dtype().to_string(),
        });
    }

    let months = DataFrame::new(vec![
        dates.cast(&timestamp_dtype())?.with_name(DATE.into()),
        values.cast(&DataType::Float64)?.with_name(TOTAL.into()),
    ])?
    .lazy()
    .filter(col(DATE).is_not_null())
    .group_by([
        col(DATE).dt().year().alias(YEAR),
        col(DATE).dt().month().alias(MONTH),
    ])
    .agg([col(TOTAL).sum()])
    .sort([YEAR, MONTH], SortMultipleOptions::default())
    .collect()?;

    let years = months
        .column(YEAR)?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let month_numbers = months
        .column(MONTH)?
        .as_materialized_series()
        .cast(&DataType::Int32)?;
    let totals = months.column(TOTAL)?.as_materialized_series().f64()?.clone();
    Ok(years
        .i32()?
        .iter()
        .zip(month_numbers.i32()?.iter())
        .zip(totals.iter())
        .filter_map(|((year, month), total)| {
            Some(MonthlyTotal {
                month: format!("{:04}-{:02}", year?, month?),
                total: total.unwrap_or(0.0),
            })
        })
        .collect())
}

fn pie_slices(counts: Vec<ValueCount>) -> Vec<PieSlice> {
    let total: usize = counts.iter().map(|entry| entry.count).sum();
    counts
        .into_iter()
        .map(|entry| PieSlice {
            percent: (entry.count as f64 / total as f64 * 1000.0).round() / 10.0,
            label: entry.value,
            count: entry.count,
        })
        .collect()
}

fn box_groups(
    group_column: &Column,
    value_column: &Column,
    top_groups: usize,
) -> Result<Vec<BoxGroup>> {
    let mut counts = value_counts(group_column)?;
    counts.truncate(top_groups);
    let groups = text_values(group_column)?;
    let values = numeric_values(value_column)?;

    let mut boxes = Vec::with_capacity(counts.len());
    for entry in counts {
        let members: Vec<f64> = groups
            .iter()
            .zip(&values)
            .filter(|(group, _)| group.as_deref() == Some(entry.value.as_str()))
            .filter_map(|(_, value)| *value)
            .collect();
        let chunked = Float64Chunked::from_slice(PlSmallStr::EMPTY, &members);
        if let Some(q) = quartiles(&chunked)? {
            boxes.push(BoxGroup {
                group: entry.value,
                count: members.len(),
                min: q.min,
                q1: q.q1,
                median: q.median,
                q3: q.q3,
                max: q.max,
            });
        }
    }
    Ok(boxes)
}

/// Computes the series for one chart.
pub fn chart_data(descriptor: &ChartDescriptor, df: &DataFrame) -> Result<ChartData> {
    let data = match &descriptor.spec {
        ChartSpec::Histogram { column, bins } => {
            let values: Vec<f64> = numeric_values(df.column(column)?)?
                .into_iter()
                .flatten()
                .collect();
            ChartData::Histogram {
                bins: histogram_bins(&values, *bins),
            }
        }
        ChartSpec::Pie { column } => ChartData::Pie {
            slices: pie_slices(value_counts(df.column(column)?)?),
        },
        ChartSpec::Bar { column, top_n } => {
            let mut bars = value_counts(df.column(column)?)?;
            bars.truncate(*top_n);
            ChartData::Bar { bars }
        }
        ChartSpec::TimeSeries {
            date_column,
            value_column,
            ..
        } => ChartData::TimeSeries {
            points: monthly_totals(df.column(date_column)?, df.column(value_column)?)?,
        },
        ChartSpec::Scatter { x, y } => {
            let xs = numeric_values(df.column(x)?)?;
            let ys = numeric_values(df.column(y)?)?;
            let points = xs
                .into_iter()
                .zip(ys)
                .filter_map(|pair| match pair {
                    (Some(x), Some(y)) => Some(ScatterPoint { x, y }),
                    _ => None,
                })
                .collect();
            ChartData::Scatter { points }
        }
        ChartSpec::Boxplot {
            value_column,
            group_column,
            top_groups,
        } => ChartData::Boxplot {
            groups: box_groups(df.column(group_column)?, df.column(value_column)?, *top_groups)?,
        },
    };
    Ok(data)
}
