use crate::aggregator::{build, describe, node_size};
use crate::output::read_report;
use crate::table::load_table;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Print the plain-text tooltip for one row
///
/// `size` defaults to the row's aggregated weight.
pub fn show_tooltip(input: PathBuf, row: usize, size: Option<f64>) -> Result<()> {
    let table = load_table(&input)
        .with_context(|| format!("Failed to load share table {}", input.display()))?;
    let totals = build(table.rows()).context("Failed to aggregate share table")?;

    let size = match size {
        Some(size) => size,
        None => node_size(table.rows(), &totals, row)?,
    };

    match describe(table.rows(), &totals, row, size)? {
        Some(tooltip) => println!("{}", tooltip),
        None => println!("(no tooltip for root)"),
    }

    Ok(())
}

/// Validate a share report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating share report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported schema version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid share report JSON");
    println!("  Version: {}", report.version);
    println!("  Root: {}", report.root);
    println!("  Total: {}", report.total);
    println!("  Categories: {}", report.categories.len());
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Share Treemap v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Sales-share totals and treemap tooltips for (name, parent, value) tables.");
}
