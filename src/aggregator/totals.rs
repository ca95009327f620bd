//! Build per-node totals from a flat share table.
//!
//! The root accumulates every item value; each category accumulates the
//! values of its own items. Items never get an entry.
//!
//! Example:
//! ```text
//! All    -        0     root      -> 350
//! Food   All      0     category  -> 300
//! Bread  Food   100     item
//! Milk   Food   200     item
//! Tools  All      0     category  ->  50
//! Saw    Tools   50     item
//! ```

use crate::table::Row;
use crate::utils::error::ShareError;
use log::debug;
use std::collections::HashMap;

/// Aggregated descendant totals keyed by node name
///
/// **Public** - built once per render and read by tooltip queries
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsMap {
    root: String,
    totals: HashMap<String, f64>,
}

impl TotalsMap {
    fn new(root: &str) -> Self {
        let mut totals = HashMap::new();
        totals.insert(root.to_string(), 0.0);
        Self {
            root: root.to_string(),
            totals,
        }
    }

    /// Name of the root node
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Grand total across all items
    pub fn root_total(&self) -> f64 {
        self.totals[&self.root]
    }

    /// Total under `name`, if it is the root or a registered category
    pub fn get(&self, name: &str) -> Option<f64> {
        self.totals.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.totals.contains_key(name)
    }

    /// Number of entries (root included)
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Registered category names, in no particular order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.totals
            .keys()
            .map(String::as_str)
            .filter(move |name| *name != self.root)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

/// Build the totals map from a row table
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `rows` - Ordered rows; the first row is the root
///
/// # Algorithm
/// 1. Register the root with total 0
/// 2. Skip any repeat of the root row
/// 3. First sight of a row whose parent is the root registers a category
///    (its own value is not counted)
/// 4. Every other row adds its value to the root and to its parent
///
/// # Errors
/// * `ShareError::EmptyTable` - no rows
/// * `ShareError::UnregisteredParent` - a row's parent was never registered
pub fn build(rows: &[Row]) -> Result<TotalsMap, ShareError> {
    let root = rows.first().ok_or(ShareError::EmptyTable)?;
    let mut totals = TotalsMap::new(&root.name);

    debug!("Building totals for root '{}' from {} rows", root.name, rows.len());

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.name == root.name {
            continue;
        }

        if row.parent == root.name && !totals.totals.contains_key(&row.name) {
            totals.totals.insert(row.name.clone(), 0.0);
            continue;
        }

        if !totals.totals.contains_key(&row.parent) {
            return Err(ShareError::UnregisteredParent {
                row: index,
                parent: row.parent.clone(),
            });
        }

        // A repeated category row has the root as parent, so the root gets the value twice
        *totals.totals.entry(root.name.clone()).or_insert(0.0) += row.value;
        *totals.totals.entry(row.parent.clone()).or_insert(0.0) += row.value;
    }

    debug!(
        "Built totals: {} categories, grand total {}",
        totals.len() - 1,
        totals.root_total()
    );

    Ok(totals)
}
