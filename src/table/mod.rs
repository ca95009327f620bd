//! Share table model and loading.
//!
//! This module handles:
//! - The `(name, parent, value)` row model
//! - Parsing chart-style JSON arrays (with optional header row)
//! - Converting the table back into the chart library's data array

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_table, parse_table};
pub use schema::{Row, ShareTable};
