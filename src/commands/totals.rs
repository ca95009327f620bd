//! Totals command implementation.
//!
//! Builds the totals for a share table, writes the JSON share report
//! and optionally prints a ranked summary.

use crate::aggregator::{
    build, calculate_share_distribution, group_thousands, CategoryShare,
};
use crate::output::{write_report, ShareReport};
use crate::table::load_table;
use anyhow::{Context, Result};
use colored::*;
use log::info;
use std::path::PathBuf;

/// Arguments for the totals command
#[derive(Debug, Clone)]
pub struct TotalsArgs {
    /// Input table
    pub input: PathBuf,

    /// Output path for the JSON report (optional)
    pub output: Option<PathBuf>,

    /// Print ranked summary to stdout
    pub print_summary: bool,
}

impl Default for TotalsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("share.json"),
            output: Some(PathBuf::from("totals.json")),
            print_summary: false,
        }
    }
}

/// Execute the totals command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was written and/or printed
pub fn execute_totals(args: TotalsArgs) -> Result<ShareReport> {
    let table = load_table(&args.input)
        .with_context(|| format!("Failed to load share table {}", args.input.display()))?;

    let totals = build(table.rows()).context("Failed to aggregate share table")?;
    let report = ShareReport::from_totals(&table, &totals);

    let distribution = calculate_share_distribution(&report.categories, report.total);
    info!("Share distribution: {}", distribution.summary());
    if distribution.is_concentrated() {
        info!(
            "'{}' alone holds more than half of the total",
            distribution.largest_category.as_deref().unwrap_or("-")
        );
    }

    if let Some(output) = &args.output {
        write_report(&report, output).context("Failed to write share report")?;
        info!("✓ Share report written to: {}", output.display());
    }

    if args.print_summary {
        println!("{}", render_summary(&report));
    }

    Ok(report)
}

/// Render a ranked category table for the terminal
pub fn render_summary(report: &ShareReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  {} {} ({})",
        "SHARE BY CATEGORY".bold(),
        report.root,
        group_thousands(report.total)
    ));
    lines.push(format!("  {}", "-".repeat(62)));
    lines.push(format!(
        "  {:<28} {:>14} {:>8} {:>7}",
        "Category", "Total", "Share", "Items"
    ));
    lines.push(format!("  {}", "-".repeat(62)));

    for share in &report.categories {
        lines.push(format_share_line(share));
    }

    lines.push(format!("  {}", "-".repeat(62)));
    lines.join("\n")
}

fn format_share_line(share: &CategoryShare) -> String {
    let name = if share.name.chars().count() > 28 {
        let head: String = share.name.chars().take(25).collect();
        format!("{}...", head)
    } else {
        share.name.clone()
    };

    let percentage = format!("{:>7.2}%", share.percentage);
    let percentage = if share.percentage > 50.0 {
        percentage.yellow().to_string()
    } else {
        percentage
    };

    format!(
        "  {:<28} {:>14} {} {:>7}",
        name,
        group_thousands(share.total),
        percentage,
        share.items
    )
}
