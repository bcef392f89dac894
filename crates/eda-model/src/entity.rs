//! Business-entity roles detected from column names.

use serde::{Deserialize, Serialize};

use crate::stats::ValueCount;

/// Columns filling the subject (customer), object (product) and amount roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRoles {
    pub subject_column: Option<String>,
    pub object_column: Option<String>,
    pub amount_column: Option<String>,
}

/// An entity value with its summed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedValue {
    pub value: String,
    pub total: f64,
}

/// Result of ranking entity values by summed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AmountRanking {
    NoAmountColumn,
    Ranked { rows: Vec<RankedValue> },
    /// The grouped sum could not be computed; presenters omit this table.
    Failed { reason: String },
}

impl AmountRanking {
    pub fn rows(&self) -> Option<&[RankedValue]> {
        match self {
            Self::Ranked { rows } => Some(rows),
            _ => None,
        }
    }
}

/// Presentation fragment for one entity role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntityFragment {
    NotDetected {
        message: String,
    },
    Detected {
        column: String,
        by_frequency: Vec<ValueCount>,
        by_amount: AmountRanking,
    },
}

impl EntityFragment {
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Detected { .. })
    }
}

/// Output of the entity analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAnalysis {
    pub roles: EntityRoles,
    pub customers: EntityFragment,
    pub products: EntityFragment,
}
