//! Column classification by storage type.

use polars::prelude::{DataFrame, DataType};
use tracing::debug;

use eda_model::{AnalysisOptions, ColumnKind, ColumnProfile, ColumnProfiles};

use crate::error::Result;
use crate::frame::{cardinality, is_numeric_dtype, is_text_dtype};
use crate::temporal::detect_temporal;

/// Kind implied by a storage type alone.
///
/// Dates are not handled here: only the column picked by temporal detection
/// is reported as [`ColumnKind::Temporal`].
pub fn kind_for_dtype(dtype: &DataType) -> ColumnKind {
    if is_numeric_dtype(dtype) {
        ColumnKind::Numeric
    } else if is_text_dtype(dtype) {
        ColumnKind::Categorical
    } else {
        ColumnKind::Unclassified
    }
}

/// Profiles every column and rewrites the detected temporal column in place.
pub fn classify(df: &mut DataFrame, options: &AnalysisOptions) -> Result<ColumnProfiles> {
    if df.width() == 0 {
        return Ok(ColumnProfiles::default());
    }

    let temporal = detect_temporal(df, options)?;
    let profiles = df
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().to_string();
            let kind = if temporal.column.as_deref() == Some(name.as_str()) {
                ColumnKind::Temporal
            } else {
                kind_for_dtype(column.dtype())
            };
            if kind == ColumnKind::Unclassified {
                debug!(column = %name, dtype = %column.dtype(), "column left unclassified");
            }
            ColumnProfile {
                dtype: column.dtype().to_string(),
                kind,
                cardinality: cardinality(column),
                missing_count: column.null_count(),
                name,
            }
        })
        .collect();

    Ok(ColumnProfiles::new(profiles, temporal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn kinds_follow_storage_type() {
        assert_eq!(kind_for_dtype(&DataType::Int32), ColumnKind::Numeric);
        assert_eq!(kind_for_dtype(&DataType::Float64), ColumnKind::Numeric);
        assert_eq!(kind_for_dtype(&DataType::String), ColumnKind::Categorical);
        assert_eq!(kind_for_dtype(&DataType::Boolean), ColumnKind::Unclassified);
        assert_eq!(kind_for_dtype(&DataType::Date), ColumnKind::Unclassified);
    }

    #[test]
    fn classify_profiles_every_column() {
        let mut df = df! {
            "order_date" => &["2024-01-01", "2024-01-15", "2024-02-03"],
            "region" => &[Some("north"), None, Some("south")],
            "units" => &[3i64, 5, 3],
            "paid" => &[true, false, true],
        }
        .unwrap();
        let profiles = classify(&mut df, &AnalysisOptions::default()).unwrap();

        assert_eq!(profiles.len(), 4);
        assert_eq!(profiles.temporal_column(), Some("order_date"));
        assert_eq!(
            profiles.get("order_date").map(|p| p.kind),
            Some(ColumnKind::Temporal)
        );

        let region = profiles.get("region").unwrap();
        assert_eq!(region.kind, ColumnKind::Categorical);
        assert_eq!(region.cardinality, 2);
        assert_eq!(region.missing_count, 1);

        assert_eq!(profiles.get("units").map(|p| p.cardinality), Some(2));
        assert_eq!(
            profiles.get("paid").map(|p| p.kind),
            Some(ColumnKind::Unclassified)
        );
        // The temporal column is not double counted as categorical.
        let categorical: Vec<&str> = profiles
            .categorical()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(categorical, vec!["region"]);
    }

    #[test]
    fn empty_table_yields_empty_profiles() {
        let mut df = DataFrame::empty();
        let profiles = classify(&mut df, &AnalysisOptions::default()).unwrap();
        assert!(profiles.is_empty());
        assert!(profiles.temporal_column().is_none());
    }
}
