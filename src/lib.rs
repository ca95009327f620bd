//! Share Treemap
//!
//! Sales-share aggregation for hierarchical `(name, parent, value)`
//! tables and the tooltips of the treemap drawn from them.
//!
//! The first row of a table is the root, rows whose parent is the root
//! are categories, and every other row is an item under a category.
//! Totals are built once per render and read by the tooltip callback
//! the chart library invokes for each displayed node.
//!
//! ## Getting Started
//!
//! ```bash
//! share-treemap totals -i share.json --summary
//! share-treemap render -i share.json -o share.html
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod table;
pub mod utils;
