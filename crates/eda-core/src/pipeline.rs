//! One analysis pass with explicit stages.
//!
//! The pass follows these stages in order:
//! 1. **Preview**: Capture the first rows as loaded
//! 2. **Classify**: Assign column kinds, rewrite the temporal column
//! 3. **Statistics**: Numeric summaries, category counts, missing counts
//! 4. **Charts**: Select chart descriptors
//! 5. **Entities**: Detect customer, product and amount roles
//! 6. **Recommendations**: Derive follow-up steps
//!
//! Each stage reads the table as left by the previous one.

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use eda_model::{
    AnalysisOptions, ChartDescriptor, ColumnProfiles, EntityAnalysis, Recommendation, Statistics,
    TablePreview,
};

use crate::charts::select_charts;
use crate::classify::classify;
use crate::entities::analyze_entities;
use crate::error::Result;
use crate::preview::preview;
use crate::recommend::recommend;
use crate::stats::summarize;

/// Everything one pass produces, plus the table it ran over.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The analysed table; its temporal column, if any, now holds timestamps.
    pub table: DataFrame,
    pub preview: TablePreview,
    pub profiles: ColumnProfiles,
    pub statistics: Statistics,
    pub charts: Vec<ChartDescriptor>,
    pub entities: EntityAnalysis,
    pub recommendations: Vec<Recommendation>,
}

/// Runs every stage over `df`.
pub fn analyze(mut df: DataFrame, options: &AnalysisOptions) -> Result<Analysis> {
    let span = info_span!("analyze", rows = df.height(), columns = df.width());
    let _guard = span.enter();

    let table_preview = info_span!("preview").in_scope(|| preview(&df, options.preview_rows))?;
    let profiles = info_span!("classify").in_scope(|| classify(&mut df, options))?;
    let statistics = info_span!("statistics").in_scope(|| summarize(&df, &profiles, options))?;
    let charts = info_span!("charts").in_scope(|| select_charts(&profiles, options));
    let entities =
        info_span!("entities").in_scope(|| analyze_entities(&df, &profiles, options))?;
    let recommendations = info_span!("recommendations")
        .in_scope(|| recommend(&profiles, &entities.roles, &charts));

    info!(
        numeric = profiles.numeric().len(),
        categorical = profiles.categorical().len(),
        temporal = profiles.temporal_column().unwrap_or("-"),
        charts = charts.len(),
        recommendations = recommendations.len(),
        "analysis complete"
    );

    Ok(Analysis {
        table: df,
        preview: table_preview,
        profiles,
        statistics,
        charts,
        entities,
        recommendations,
    })
}
