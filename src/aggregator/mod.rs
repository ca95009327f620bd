//! Aggregation of share tables into totals, tooltips and category shares.
//!
//! This module transforms a flat `(name, parent, value)` table into:
//! - Per-root and per-category totals
//! - Tooltip panels relative to the parent total
//! - Ranked category shares

pub mod format;
pub mod shares;
pub mod tooltip;
pub mod totals;

// Re-export main types and functions
pub use format::group_thousands;
pub use shares::{
    calculate_category_shares, calculate_share_distribution, CategoryShare, ShareDistribution,
};
pub use tooltip::{describe, node_size, tooltip, NodeKind, Tooltip};
pub use totals::{build, TotalsMap};
