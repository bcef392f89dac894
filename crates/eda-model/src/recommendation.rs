//! Fixed analysis recommendations.

use serde::{Deserialize, Serialize};

/// A suggested next analysis step, derived from the detected table structure.
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ReviewHistograms,
    InvestigateMissingValues,
    GroupRareCategories,
    CheckTimeTrends,
    TargetTopCustomers,
    PromoteTopProducts,
    ExploreNumericRelationships,
    CompareGroupDistributions,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Self::ReviewHistograms => {
                "Review histograms to identify skewed or outlier-prone numeric columns."
            }
            Self::InvestigateMissingValues => "Investigate columns with high missing value counts.",
            Self::GroupRareCategories => {
                "Look for dominant categories and consider grouping infrequent labels as 'Other'."
            }
            Self::CheckTimeTrends => "Check trends over time for any time-related columns.",
            Self::TargetTopCustomers => {
                "Identify top customers for targeted marketing or loyalty programs."
            }
            Self::PromoteTopProducts => "Promote or bundle best-selling products/categories.",
            Self::ExploreNumericRelationships => "Explore numeric relationships using scatter plots.",
            Self::CompareGroupDistributions => {
                "Analyze numeric distribution by groups (boxplots)."
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
