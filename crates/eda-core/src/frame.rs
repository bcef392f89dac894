//! Column access and counting helpers over Polars frames.

use chrono::{DateTime, NaiveDateTime, Utc};
use polars::prelude::{
    Column, DataFrame, DataType, IntoLazy, SortMultipleOptions, TimeUnit, col, len,
};
use tracing::debug;

use eda_model::ValueCount;

use crate::error::{CoreError, Result};

/// Storage type of the rewritten temporal column.
pub fn timestamp_dtype() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, None)
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Free text and fixed-label types.
pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::String | DataType::Categorical(..) | DataType::Enum(..)
    )
}

pub fn is_temporal_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Date | DataType::Datetime(..))
}

/// Distinct non-missing values in a column.
pub fn cardinality(column: &Column) -> usize {
    match column.as_materialized_series().drop_nulls().n_unique() {
        Ok(count) => count,
        Err(error) => {
            debug!(column = %column.name(), %error, "distinct count unavailable");
            0
        }
    }
}

/// Column values rendered as text; nulls stay `None`.
pub fn text_values(column: &Column) -> Result<Vec<Option<String>>> {
    let series = column.as_materialized_series().cast(&DataType::String)?;
    Ok(series
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Numeric column values as `f64`.
pub fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    if !is_numeric_dtype(column.dtype()) {
        return Err(CoreError::NotNumeric {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.iter().collect())
}

/// Timestamps of a `Date` or `Datetime` column.
pub fn timestamp_values(column: &Column) -> Result<Vec<Option<NaiveDateTime>>> {
    if !is_temporal_dtype(column.dtype()) {
        return Err(CoreError::NotTemporal {
            column: column.name().to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let millis = column
        .as_materialized_series()
        .cast(&timestamp_dtype())?
        .cast(&DataType::Int64)?;
    Ok(millis
        .i64()?
        .iter()
        .map(|value| {
            value
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|timestamp| timestamp.naive_utc())
        })
        .collect())
}

const KEY: &str = "key";
const COUNT: &str = "count";
const TOTAL: &str = "total";

fn descending() -> SortMultipleOptions {
    // Stable: equal counts keep first-seen order from `group_by_stable`.
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_maintain_order(true)
}

fn key_column(column: &Column) -> Result<Column> {
    Ok(column.cast(&DataType::String)?.with_name(KEY.into()))
}

/// Counts occurrences of each present value, most frequent first.
///
/// Ties keep the order in which values were first encountered.
pub fn value_counts(column: &Column) -> Result<Vec<ValueCount>> {
    let counts = DataFrame::new(vec![key_column(column)?])?
        .lazy()
        .filter(col(KEY).is_not_null())
        .group_by_stable([col(KEY)])
        .agg([len().alias(COUNT)])
        .sort([COUNT], descending())
        .collect()?;

    let keys = counts.column(KEY)?.as_materialized_series().str()?.clone();
    let totals = counts
        .column(COUNT)?
        .as_materialized_series()
        .cast(&DataType::UInt64)?;
    Ok(keys
        .iter()
        .zip(totals.u64()?.iter())
        .filter_map(|(value, count)| {
            Some(ValueCount {
                value: value?.to_string(),
                count: usize::try_from(count?).ok()?,
            })
        })
        .collect())
}

/// Sums a numeric `amounts` column per key, largest total first.
///
/// Rows without a key are skipped; missing amounts add nothing but still
/// register the key. Ties keep first-seen order.
pub fn grouped_sums(keys: &Column, amounts: &Column) -> Result<Vec<(String, f64)>> {
    if !is_numeric_dtype(amounts.dtype()) {
        return Err(CoreError::NotNumeric {
            column: amounts.name().to_string(),
            dtype: amounts.dtype().to_string(),
        });
    }
    let amounts = amounts.cast(&DataType::Float64)?.with_name(TOTAL.into());
    let sums = DataFrame::new(vec![key_column(keys)?, amounts])?
        .lazy()
        .filter(col(KEY).is_not_null())
        .group_by_stable([col(KEY)])
        .agg([col(TOTAL).sum()])
        .sort([TOTAL], descending())
        .collect()?;

    let keys = sums.column(KEY)?.as_materialized_series().str()?.clone();
    let totals = sums.column(TOTAL)?.as_materialized_series().f64()?.clone();
    Ok(keys
        .iter()
        .zip(totals.iter())
        .filter_map(|(key, total)| Some((key?.to_string(), total.unwrap_or(0.0))))
        .collect())
}
