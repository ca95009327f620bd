//! Share report JSON schema.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{calculate_category_shares, CategoryShare, TotalsMap};
use crate::table::ShareTable;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Name of the root node
    pub root: String,

    /// Grand total across all items
    pub total: f64,

    /// Categories ranked by total
    pub categories: Vec<CategoryShare>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl ShareReport {
    /// Build a report from a table and the totals computed for it
    pub fn from_totals(table: &ShareTable, totals: &TotalsMap) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            root: totals.root().to_string(),
            total: totals.root_total(),
            categories: calculate_category_shares(table.rows(), totals),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
