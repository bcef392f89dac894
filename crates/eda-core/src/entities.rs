//! Keyword-based business entity detection.
//!
//! Roles are inferred from column names only: the first column (table order)
//! whose lowercased name contains any keyword of a role fills that role.

use polars::prelude::DataFrame;
use tracing::debug;

use eda_model::{
    AmountRanking, AnalysisOptions, ColumnProfiles, EntityAnalysis, EntityFragment, EntityRoles,
    RankedValue,
};

use crate::error::Result;
use crate::frame::{grouped_sums, value_counts};

pub const SUBJECT_KEYWORDS: [&str; 4] = ["customer", "user", "buyer", "client"];
pub const OBJECT_KEYWORDS: [&str; 4] = ["product", "item", "category", "sku"];
pub const AMOUNT_KEYWORDS: [&str; 4] = ["amount", "sales", "revenue", "total"];

const NO_CUSTOMER: &str = "No customer column detected.";
const NO_PRODUCT: &str = "No product/category column detected.";

/// First column whose lowercased name contains one of `keywords`.
pub fn find_column<'a>(names: &[&'a str], keywords: &[&str]) -> Option<&'a str> {
    names.iter().copied().find(|name| {
        let lower = name.to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    })
}

/// Assigns the subject, object and amount roles.
///
/// A column may fill more than one role (e.g. `total_sales_by_customer`).
pub fn detect_roles(profiles: &ColumnProfiles) -> EntityRoles {
    let names = profiles.names();
    EntityRoles {
        subject_column: find_column(&names, &SUBJECT_KEYWORDS).map(str::to_string),
        object_column: find_column(&names, &OBJECT_KEYWORDS).map(str::to_string),
        amount_column: find_column(&names, &AMOUNT_KEYWORDS).map(str::to_string),
    }
}

fn rank_by_amount(
    df: &DataFrame,
    column: &str,
    amount_column: &str,
    top_n: usize,
) -> Result<Vec<RankedValue>> {
    let mut sums = grouped_sums(df.column(column)?, df.column(amount_column)?)?;
    sums.truncate(top_n);
    Ok(sums
        .into_iter()
        .map(|(value, total)| RankedValue { value, total })
        .collect())
}

fn fragment(
    df: &DataFrame,
    column: Option<&str>,
    amount_column: Option<&str>,
    top_n: usize,
    placeholder: &str,
) -> Result<EntityFragment> {
    let Some(column) = column else {
        return Ok(EntityFragment::NotDetected {
            message: placeholder.to_string(),
        });
    };

    let mut by_frequency = value_counts(df.column(column)?)?;
    by_frequency.truncate(top_n);

    let by_amount = match amount_column {
        None => AmountRanking::NoAmountColumn,
        Some(amount) => match rank_by_amount(df, column, amount, top_n) {
            Ok(rows) => AmountRanking::Ranked { rows },
            Err(error) => {
                debug!(column, amount, %error, "amount ranking skipped");
                AmountRanking::Failed {
                    reason: error.to_string(),
                }
            }
        },
    };

    Ok(EntityFragment::Detected {
        column: column.to_string(),
        by_frequency,
        by_amount,
    })
}

/// Detects entity roles and builds the customer and product fragments.
pub fn analyze_entities(
    df: &DataFrame,
    profiles: &ColumnProfiles,
    options: &AnalysisOptions,
) -> Result<EntityAnalysis> {
    let roles = detect_roles(profiles);
    debug!(
        subject = ?roles.subject_column,
        object = ?roles.object_column,
        amount = ?roles.amount_column,
        "entity roles detected"
    );

    let amount = roles.amount_column.as_deref();
    let customers = fragment(
        df,
        roles.subject_column.as_deref(),
        amount,
        options.entity_top_n,
        NO_CUSTOMER,
    )?;
    let products = fragment(
        df,
        roles.object_column.as_deref(),
        amount,
        options.entity_top_n,
        NO_PRODUCT,
    )?;

    Ok(EntityAnalysis {
        roles,
        customers,
        products,
    })
}
