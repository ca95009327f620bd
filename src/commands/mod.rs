//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod render;
pub mod totals;
pub mod utils;

// Re-export main command functions
pub use render::{execute_render, validate_render_args, RenderArgs};
pub use totals::{execute_totals, render_summary, TotalsArgs};
pub use utils::{display_version, show_tooltip, validate_report_file};
