//! Describe-style statistics, category frequencies and missing counts.

use polars::prelude::*;
use tracing::debug;

use eda_model::{
    AnalysisOptions, CategoryFrequencies, ColumnProfiles, MissingCount, NumericSummary, Statistics,
};

use crate::error::Result;
use crate::frame::value_counts;

/// Order statistics of a set of values, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quartiles {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Quartiles with linear interpolation; `None` when no values are present.
pub(crate) fn quartiles(values: &Float64Chunked) -> Result<Option<Quartiles>> {
    let (Some(min), Some(max)) = (values.min(), values.max()) else {
        return Ok(None);
    };
    let quantile = |q: f64| values.quantile(q, QuantileMethod::Linear);
    match (quantile(0.25)?, quantile(0.5)?, quantile(0.75)?) {
        (Some(q1), Some(median), Some(q3)) => Ok(Some(Quartiles {
            min,
            q1,
            median,
            q3,
            max,
        })),
        _ => Ok(None),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite()).map(round2)
}

fn describe(column: &Column) -> Result<NumericSummary> {
    let series = column
        .as_materialized_series()
        .drop_nulls()
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    let quartiles = quartiles(values)?;

    Ok(NumericSummary {
        column: column.name().to_string(),
        count: values.len(),
        mean: finite(values.mean()),
        // Sample deviation; undefined below two values.
        std: finite(values.std(1)),
        min: finite(quartiles.map(|q| q.min)),
        q25: finite(quartiles.map(|q| q.q1)),
        median: finite(quartiles.map(|q| q.median)),
        q75: finite(quartiles.map(|q| q.q3)),
        max: finite(quartiles.map(|q| q.max)),
    })
}

/// Computes the statistics block of the report.
pub fn summarize(
    df: &DataFrame,
    profiles: &ColumnProfiles,
    options: &AnalysisOptions,
) -> Result<Statistics> {
    let numeric_profiles = profiles.numeric();
    let numeric = if numeric_profiles.is_empty() {
        None
    } else {
        let summaries = numeric_profiles
            .iter()
            .map(|profile| describe(df.column(&profile.name)?))
            .collect::<Result<Vec<_>>>()?;
        Some(summaries)
    };

    let mut categorical = Vec::new();
    for profile in profiles.categorical() {
        let mut top = value_counts(df.column(&profile.name)?)?;
        top.truncate(options.category_top_n);
        categorical.push(CategoryFrequencies {
            column: profile.name.clone(),
            top,
        });
    }

    let missing = df
        .get_columns()
        .iter()
        .map(|column| MissingCount {
            column: column.name().to_string(),
            missing: column.null_count(),
        })
        .collect();

    debug!(
        numeric = numeric_profiles.len(),
        categorical = categorical.len(),
        "statistics computed"
    );
    Ok(Statistics {
        numeric,
        categorical,
        missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::{ColumnKind, ColumnProfile, TemporalDetection};

    fn profiles_for(df: &DataFrame, kinds: &[(&str, ColumnKind)]) -> ColumnProfiles {
        let profiles = kinds
            .iter()
            .map(|(name, kind)| ColumnProfile {
                name: (*name).to_string(),
                dtype: df.column(name).unwrap().dtype().to_string(),
                kind: *kind,
                cardinality: 0,
                missing_count: 0,
            })
            .collect();
        ColumnProfiles::new(profiles, TemporalDetection::default())
    }

    #[test]
    fn describe_matches_linear_quantiles() {
        let df = df! { "price" => &[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)] }.unwrap();
        let profiles = profiles_for(&df, &[("price", ColumnKind::Numeric)]);
        let stats = summarize(&df, &profiles, &AnalysisOptions::default()).unwrap();

        let summary = &stats.numeric.as_ref().unwrap()[0];
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, Some(2.5));
        assert_eq!(summary.std, Some(1.29));
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.q25, Some(1.75));
        assert_eq!(summary.median, Some(2.5));
        assert_eq!(summary.q75, Some(3.25));
        assert_eq!(summary.max, Some(4.0));
        assert_eq!(stats.missing_for("price"), Some(1));
    }

    #[test]
    fn no_numeric_columns_means_no_numeric_block() {
        let df = df! { "city" => &["a", "b", "a", "c", "b", "a"] }.unwrap();
        let profiles = profiles_for(&df, &[("city", ColumnKind::Categorical)]);
        let options = AnalysisOptions {
            category_top_n: 2,
            ..AnalysisOptions::default()
        };
        let stats = summarize(&df, &profiles, &options).unwrap();

        assert!(stats.numeric.is_none());
        let city = stats.categorical_for("city").unwrap();
        let top: Vec<(&str, usize)> = city
            .top
            .iter()
            .map(|entry| (entry.value.as_str(), entry.count))
            .collect();
        assert_eq!(top, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn missing_counts_cover_unclassified_columns() {
        let df = df! {
            "flag" => &[Some(true), None],
            "n" => &[Some(1i64), Some(2)],
        }
        .unwrap();
        let profiles = profiles_for(
            &df,
            &[("flag", ColumnKind::Unclassified), ("n", ColumnKind::Numeric)],
        );
        let stats = summarize(&df, &profiles, &AnalysisOptions::default()).unwrap();
        let missing: Vec<(&str, usize)> = stats
            .missing
            .iter()
            .map(|entry| (entry.column.as_str(), entry.missing))
            .collect();
        assert_eq!(missing, vec![("flag", 1), ("n", 0)]);
    }

    #[test]
    fn all_null_numeric_column_has_empty_summary() {
        let df = df! { "score" => &[None::<f64>, None] }.unwrap();
        let profiles = profiles_for(&df, &[("score", ColumnKind::Numeric)]);
        let stats = summarize(&df, &profiles, &AnalysisOptions::default()).unwrap();

        let summary = &stats.numeric.unwrap()[0];
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_none());
        assert!(summary.median.is_none());
    }
}
