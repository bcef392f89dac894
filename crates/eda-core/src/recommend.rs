//! Rule-based follow-up recommendations.

use eda_model::{ChartDescriptor, ChartKind, ColumnProfiles, EntityRoles, Recommendation};

/// Lists recommendations in a fixed order; each rule is checked on its own.
///
/// The scatter rule follows the selected charts rather than the column
/// counts, so it stays consistent with what the report actually shows.
pub fn recommend(
    profiles: &ColumnProfiles,
    roles: &EntityRoles,
    charts: &[ChartDescriptor],
) -> Vec<Recommendation> {
    let has_numeric = profiles.has_numeric();
    let has_categorical = profiles.has_categorical();
    let mut recommendations = Vec::new();

    if has_numeric {
        recommendations.push(Recommendation::ReviewHistograms);
        recommendations.push(Recommendation::InvestigateMissingValues);
    }
    if has_categorical {
        recommendations.push(Recommendation::GroupRareCategories);
    }
    if profiles.temporal_column().is_some() {
        recommendations.push(Recommendation::CheckTimeTrends);
    }
    if roles.subject_column.is_some() {
        recommendations.push(Recommendation::TargetTopCustomers);
    }
    if roles.object_column.is_some() {
        recommendations.push(Recommendation::PromoteTopProducts);
    }
    if charts.iter().any(|chart| chart.kind() == ChartKind::Scatter) {
        recommendations.push(Recommendation::ExploreNumericRelationships);
    }
    if has_numeric && has_categorical {
        recommendations.push(Recommendation::CompareGroupDistributions);
    }
    recommendations
}
