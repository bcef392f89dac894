//! Temporal column detection.
//!
//! Only columns whose name mentions a date or time are considered. Candidates
//! are tried in table order and the first one whose every value parses wins;
//! it is rewritten in place to millisecond timestamps so later stages read
//! real dates. Rejected candidates are recorded with the reason.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series};
use tracing::{debug, info};

use eda_model::{AnalysisOptions, TemporalDetection, TemporalRejection};

use crate::error::{Result, TemporalParseError};
use crate::frame::{is_numeric_dtype, is_temporal_dtype, is_text_dtype, timestamp_dtype};

const TEMPORAL_NAME_HINTS: [&str; 2] = ["date", "time"];

/// True when the column name contains `date` or `time`, ignoring case.
pub fn is_temporal_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    TEMPORAL_NAME_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Picks at most one temporal column and rewrites it to timestamps.
pub fn detect_temporal(
    df: &mut DataFrame,
    options: &AnalysisOptions,
) -> Result<TemporalDetection> {
    let candidates: Vec<String> = df
        .get_column_names()
        .into_iter()
        .filter(|name| is_temporal_name(name.as_str()))
        .map(|name| name.to_string())
        .collect();

    let mut detection = TemporalDetection::default();
    for name in candidates {
        let parsed = parse_candidate(df.column(&name)?, &options.temporal_formats);
        match parsed {
            Ok(series) => {
                df.with_column(series)?;
                info!(column = %name, "temporal column detected");
                detection.column = Some(name);
                break;
            }
            Err(reason) => {
                debug!(column = %name, %reason, "temporal candidate rejected");
                detection.rejected.push(TemporalRejection {
                    column: name,
                    reason: reason.to_string(),
                });
            }
        }
    }
    Ok(detection)
}

fn parse_candidate(
    column: &Column,
    formats: &[String],
) -> std::result::Result<Series, TemporalParseError> {
    let dtype = column.dtype();
    if is_temporal_dtype(dtype) {
        return Ok(column.as_materialized_series().cast(&timestamp_dtype())?);
    }
    if is_numeric_dtype(dtype) {
        return Err(TemporalParseError::Numeric {
            dtype: dtype.to_string(),
        });
    }
    if !is_text_dtype(dtype) {
        return Err(TemporalParseError::Unsupported {
            dtype: dtype.to_string(),
        });
    }

    let text = column.as_materialized_series().cast(&DataType::String)?;
    let values: Vec<Option<&str>> = text
        .str()?
        .iter()
        .map(|value| value.map(str::trim).filter(|value| !value.is_empty()))
        .collect();
    let format = select_format(values.iter().flatten().copied(), formats)?;

    let millis: Vec<Option<i64>> = values
        .iter()
        .map(|value| {
            value
                .and_then(|value| parse_timestamp(value, format))
                .map(|timestamp| timestamp.and_utc().timestamp_millis())
        })
        .collect();
    Ok(Series::new(column.name().clone(), millis).cast(&timestamp_dtype())?)
}

/// Finds the first format that parses every value.
fn select_format<'a, 'f>(
    values: impl Iterator<Item = &'a str> + Clone,
    formats: &'f [String],
) -> std::result::Result<&'f str, TemporalParseError> {
    if values.clone().next().is_none() {
        return Err(TemporalParseError::Empty);
    }
    if let Some(format) = formats
        .iter()
        .find(|format| values.clone().all(|value| parse_timestamp(value, format).is_some()))
    {
        return Ok(format.as_str());
    }
    let unparseable = values
        .clone()
        .find(|value| formats.iter().all(|format| parse_timestamp(value, format).is_none()));
    match unparseable {
        Some(value) => Err(TemporalParseError::Unparseable {
            value: value.to_string(),
        }),
        None => Err(TemporalParseError::MixedFormats),
    }
}

/// Parses a timestamp; date-only formats yield midnight.
///
/// Values carrying a UTC offset are converted to UTC.
pub fn parse_timestamp(value: &str, format: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_str(value, format)
        .ok()
        .map(|timestamp| timestamp.naive_utc())
        .or_else(|| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, format)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use crate::frame::timestamp_values;

    #[test]
    fn name_hint_is_case_insensitive_substring() {
        assert!(is_temporal_name("Order_Date"));
        assert!(is_temporal_name("TIMESTAMP"));
        assert!(is_temporal_name("update_time_utc"));
        assert!(!is_temporal_name("amount"));
    }

    #[test]
    fn parse_timestamp_handles_dates_and_datetimes() {
        let date = parse_timestamp("2024-03-09", "%Y-%m-%d").unwrap();
        assert_eq!(date.to_string(), "2024-03-09 00:00:00");
        let datetime = parse_timestamp("2024-03-09 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(datetime.to_string(), "2024-03-09 14:30:00");
        assert!(parse_timestamp("2024-03-09 14:30:00", "%Y-%m-%d").is_none());
    }

    #[test]
    fn parse_timestamp_converts_offsets_to_utc() {
        let format = "%Y-%m-%dT%H:%M:%S%.f%:z";
        let stamp = parse_timestamp("2024-01-05T10:00:00+02:00", format).unwrap();
        assert_eq!(stamp.to_string(), "2024-01-05 08:00:00");
        let stamp = parse_timestamp("2024-01-05T23:30:00.5-01:00", format).unwrap();
        assert_eq!(stamp.to_string(), "2024-01-06 00:30:00.500");
    }

    #[test]
    fn default_formats_cover_fractions_and_offsets() {
        let cases = [
            ("2024-01-05T10:00:00+02:00", "2024-01-05 08:00:00"),
            ("2024-01-05 10:00:00.250", "2024-01-05 10:00:00.250"),
            ("2024-01-05T10:00:00.125Z", "2024-01-05 10:00:00.125"),
            ("2024-01-05T10:00:00Z", "2024-01-05 10:00:00"),
        ];
        for (value, expected) in cases {
            let mut df = df! { "created_at_time" => &[value] }.unwrap();
            let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();
            assert_eq!(
                detection.column.as_deref(),
                Some("created_at_time"),
                "{value} rejected: {:?}",
                detection.rejected
            );
            let stamps = timestamp_values(df.column("created_at_time").unwrap()).unwrap();
            assert_eq!(stamps[0].unwrap().to_string(), expected);
        }
    }

    #[test]
    fn whole_and_fractional_seconds_share_a_format() {
        let mut df = df! {
            "event_time" => &["2024-01-05 10:00:00", "2024-01-05 10:00:00.250"],
        }
        .unwrap();
        let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();
        assert_eq!(detection.column.as_deref(), Some("event_time"));
    }

    #[test]
    fn first_parseable_candidate_wins_and_is_rewritten() {
        let mut df = df! {
            "ship_date" => &["soon", "later"],
            "order_date" => &["2024-01-05", "2024-02-10"],
            "delivery_time" => &["2024-01-07", "2024-02-12"],
        }
        .unwrap();
        let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();

        assert_eq!(detection.column.as_deref(), Some("order_date"));
        assert_eq!(detection.rejected.len(), 1);
        assert_eq!(detection.rejected[0].column, "ship_date");

        let order_date = df.column("order_date").unwrap();
        assert_eq!(order_date.dtype(), &timestamp_dtype());
        let stamps = timestamp_values(order_date).unwrap();
        assert_eq!(stamps[1].unwrap().to_string(), "2024-02-10 00:00:00");
        // Later candidates are left untouched.
        assert_eq!(df.column("delivery_time").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn numeric_candidates_stay_numeric() {
        let mut df = df! { "time_spent" => &[1.5, 2.0, 3.25] }.unwrap();
        let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();

        assert!(detection.column.is_none());
        assert_eq!(df.column("time_spent").unwrap().dtype(), &DataType::Float64);
        assert_eq!(
            detection.rejected[0].reason,
            "numeric column (type f64); epoch numbers are not read as timestamps"
        );
    }

    #[test]
    fn missing_values_do_not_block_detection() {
        let mut df = df! { "created_at_time" => &[Some("2023-12-31"), None] }.unwrap();
        let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();

        assert_eq!(detection.column.as_deref(), Some("created_at_time"));
        assert_eq!(df.column("created_at_time").unwrap().null_count(), 1);
    }

    #[test]
    fn all_null_candidate_is_rejected() {
        let mut df = df! { "date" => &[None::<&str>, None] }.unwrap();
        let detection = detect_temporal(&mut df, &AnalysisOptions::default()).unwrap();

        assert!(detection.column.is_none());
        assert_eq!(detection.rejected[0].reason, "column has no values");
    }

    #[test]
    fn mixed_formats_are_rejected() {
        let values = ["2024-01-05", "01/31/2024"];
        let formats = vec!["%Y-%m-%d".to_string(), "%m/%d/%Y".to_string()];
        let result = select_format(values.iter().copied(), &formats);
        assert!(matches!(result, Err(TemporalParseError::MixedFormats)));
    }
}
