//! Render entry point and the treemap library seam.
//!
//! Layout and drawing belong to the library. This module checks the
//! library is ready, builds the totals, and hands the library a tooltip
//! callback that reads them.

use super::options::TreemapOptions;
use crate::aggregator::{build, tooltip, TotalsMap};
use crate::table::ShareTable;
use crate::utils::error::{RenderError, ShareError};
use log::{debug, info};

/// Tooltip callback: `(row index, node size) -> markup`, `None` for no tooltip
pub type TooltipFn<'a> = dyn Fn(usize, f64) -> Result<Option<String>, ShareError> + 'a;

/// Opaque handle to the display surface the host owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container(String);

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A treemap rendering library
///
/// Implementations own layout, drawing and interaction. They call the
/// tooltip callback for the nodes they display.
pub trait TreemapLibrary {
    /// Whether the library has finished loading and can draw
    fn is_ready(&self) -> bool;

    /// Draw `table` into `container`
    fn draw(
        &mut self,
        container: &Container,
        table: &ShareTable,
        options: &TreemapOptions,
        tooltip: &TooltipFn<'_>,
    ) -> Result<(), RenderError>;
}

/// Render a share treemap with the default style
///
/// **Public** - main entry point for rendering
///
/// # Arguments
/// * `library` - Loaded rendering library
/// * `container` - Target display surface
/// * `table` - Row table, root first
/// * `width`, `height` - Chart size, 960x400 when `None`
///
/// # Returns
/// The totals the tooltips were computed from
///
/// # Errors
/// * `RenderError::LibraryNotReady` - library still loading, nothing drawn
/// * `RenderError::Share` - malformed table, nothing drawn
/// * `RenderError::Draw` - library failure
pub fn render_share_treemap<L: TreemapLibrary + ?Sized>(
    library: &mut L,
    container: &Container,
    table: &ShareTable,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<TotalsMap, RenderError> {
    let options = TreemapOptions::new().with_size(width, height);
    render_with_options(library, container, table, &options)
}

/// Render a share treemap with explicit options
///
/// **Public** - use when the caller customises title or colors
pub fn render_with_options<L: TreemapLibrary + ?Sized>(
    library: &mut L,
    container: &Container,
    table: &ShareTable,
    options: &TreemapOptions,
) -> Result<TotalsMap, RenderError> {
    if !library.is_ready() {
        return Err(RenderError::LibraryNotReady);
    }

    let totals = build(table.rows())?;
    debug!(
        "Totals ready: root '{}' = {}",
        totals.root(),
        totals.root_total()
    );

    let rows = table.rows();
    let callback = |row: usize, size: f64| tooltip(rows, &totals, row, size);

    info!(
        "Drawing treemap into '{}' ({}x{}, {} rows)",
        container.id(),
        options.width,
        options.height,
        table.len()
    );
    library.draw(container, table, options, &callback)?;

    Ok(totals)
}
