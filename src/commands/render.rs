//! Render command implementation.
//!
//! The render command:
//! 1. Loads the share table
//! 2. Builds totals and tooltips through the page backend
//! 3. Writes the HTML page

use crate::chart::{render_with_options, Container, GoogleChartsPage, TreemapOptions};
use crate::table::load_table;
use crate::output::write_html;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Input table (JSON array of [name, parent, value])
    pub input: PathBuf,

    /// Output path for the HTML page
    pub output: PathBuf,

    /// Chart width in pixels (960 when None)
    pub width: Option<u32>,

    /// Chart height in pixels (400 when None)
    pub height: Option<u32>,

    /// Optional chart title
    pub title: Option<String>,

    /// Id of the element the chart is drawn into
    pub container: String,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("share.json"),
            output: PathBuf::from("share.html"),
            width: None,
            height: None,
            title: None,
            container: "share".to_string(),
        }
    }
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering share treemap from: {}", args.input.display());

    info!("Step 1/3: Loading share table...");
    let table = load_table(&args.input)
        .with_context(|| format!("Failed to load share table {}", args.input.display()))?;
    debug!("Loaded {} rows, root '{}'", table.len(), table.root().name);

    info!("Step 2/3: Building treemap page...");
    let mut options = TreemapOptions::new().with_size(args.width, args.height);
    if let Some(title) = &args.title {
        options = options.with_title(title.clone());
    }

    let mut page = GoogleChartsPage::new();
    let totals = render_with_options(&mut page, &Container::new(&args.container), &table, &options)
        .context("Failed to render share treemap")?;
    info!("Grand total: {}", totals.root_total());

    info!("Step 3/3: Writing page...");
    let html = page
        .into_html()
        .context("Treemap library produced no page")?;
    write_html(&html, &args.output).context("Failed to write treemap page")?;

    info!("✓ Treemap written to: {}", args.output.display());
    info!(
        "Render completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
pub fn validate_render_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.width == Some(0) || args.height == Some(0) {
        anyhow::bail!("Chart width and height must be greater than 0");
    }

    if args.container.is_empty() {
        anyhow::bail!("Container id cannot be empty");
    }

    if args.container.chars().any(char::is_whitespace) {
        anyhow::bail!("Container id cannot contain whitespace");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_render_args_defaults() {
        assert!(validate_render_args(&RenderArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_render_args_zero_width() {
        let args = RenderArgs {
            width: Some(0),
            ..Default::default()
        };

        assert!(validate_render_args(&args).is_err());
    }

    #[test]
    fn test_validate_render_args_bad_container() {
        let args = RenderArgs {
            container: "my chart".to_string(),
            ..Default::default()
        };

        assert!(validate_render_args(&args).is_err());
    }
}
