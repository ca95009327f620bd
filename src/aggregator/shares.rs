//! Rank categories by their share of the grand total.
//!
//! Categories holding most of the total are where the treemap's
//! area goes, so the ranked list doubles as a text summary of the chart.

use super::totals::TotalsMap;
use crate::table::Row;
use log::debug;
use serde::{Deserialize, Serialize};

/// One category's share of the root total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name
    pub name: String,

    /// Sum of the category's item values
    pub total: f64,

    /// Percentage of the root total
    pub percentage: f64,

    /// Number of item rows under the category
    pub items: usize,
}

/// Calculate ranked category shares
///
/// **Public** - main entry point for share metrics
///
/// # Returns
/// Categories sorted by total (descending), ties broken by name
pub fn calculate_category_shares(rows: &[Row], totals: &TotalsMap) -> Vec<CategoryShare> {
    let grand_total = totals.root_total();

    let mut shares: Vec<CategoryShare> = totals
        .categories()
        .map(|name| {
            let total = totals.get(name).unwrap_or(0.0);
            let items = rows
                .iter()
                .filter(|row| row.parent == name && row.name != name)
                .count();

            CategoryShare {
                name: name.to_string(),
                total,
                percentage: if grand_total > 0.0 {
                    (total / grand_total) * 100.0
                } else {
                    0.0
                },
                items,
            }
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!("Calculated shares for {} categories", shares.len());

    shares
}

/// Calculate share distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_share_distribution(shares: &[CategoryShare], grand_total: f64) -> ShareDistribution {
    let largest = shares.first();

    ShareDistribution {
        grand_total,
        category_count: shares.len(),
        item_count: shares.iter().map(|s| s.items).sum(),
        largest_category: largest.map(|s| s.name.clone()),
        largest_percentage: largest.map(|s| s.percentage).unwrap_or(0.0),
    }
}

/// Share distribution statistics
///
/// **Public** - returned from calculate_share_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareDistribution {
    /// Sum of all item values
    pub grand_total: f64,

    /// Number of categories
    pub category_count: usize,

    /// Number of items across all categories
    pub item_count: usize,

    /// Category with the largest total
    pub largest_category: Option<String>,

    /// Percentage of the grand total held by the largest category
    pub largest_percentage: f64,
}

impl ShareDistribution {
    /// True when a single category holds more than half of the total
    pub fn is_concentrated(&self) -> bool {
        self.largest_percentage > 50.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Categories: {} | Items: {} | Largest: {} ({:.1}%)",
            self.grand_total,
            self.category_count,
            self.item_count,
            self.largest_category.as_deref().unwrap_or("-"),
            self.largest_percentage
        )
    }
}
