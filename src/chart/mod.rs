//! Treemap rendering through an injected chart library.
//!
//! The crate never lays out or draws the treemap. It prepares totals,
//! options and the tooltip callback, and hands them to a `TreemapLibrary`.

pub mod google;
pub mod options;
pub mod renderer;

// Re-export main types
pub use google::GoogleChartsPage;
pub use options::TreemapOptions;
pub use renderer::{render_share_treemap, render_with_options, Container, TooltipFn, TreemapLibrary};
