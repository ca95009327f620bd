//! Share Treemap CLI
//!
//! Builds category totals for a share table, renders the treemap page,
//! and prints node tooltips.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use share_treemap::commands::{
    display_version, execute_render, execute_totals, show_tooltip, validate_render_args,
    validate_report_file, RenderArgs, TotalsArgs,
};

/// Share Treemap - sales-share totals and treemap tooltips
#[derive(Parser, Debug)]
#[command(name = "share-treemap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the share treemap as a standalone HTML page
    Render {
        /// Input table (JSON array of [name, parent, value], root first)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the HTML page
        #[arg(short, long, default_value = "share.html")]
        output: PathBuf,

        /// Chart width in pixels (default 960)
        #[arg(long)]
        width: Option<u32>,

        /// Chart height in pixels (default 400)
        #[arg(long)]
        height: Option<u32>,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Id of the element the chart is drawn into
        #[arg(long, default_value = "share")]
        container: String,
    },

    /// Compute category totals and write the share report
    Totals {
        /// Input table
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print ranked summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Print the tooltip for one row
    Tooltip {
        /// Input table
        #[arg(short, long)]
        input: PathBuf,

        /// Row index (0 is the root)
        #[arg(short, long)]
        row: usize,

        /// Node size as the chart reports it (defaults to the aggregated weight)
        #[arg(long)]
        size: Option<f64>,
    },

    /// Validate a share report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            input,
            output,
            width,
            height,
            title,
            container,
        } => {
            let args = RenderArgs {
                input,
                output,
                width,
                height,
                title,
                container,
            };

            validate_render_args(&args)?;
            execute_render(args)?;
        }

        Commands::Totals {
            input,
            output,
            summary,
        } => {
            // Print the summary when nothing would be written
            let print_summary = summary || output.is_none();
            execute_totals(TotalsArgs {
                input,
                output,
                print_summary,
            })?;
        }

        Commands::Tooltip { input, row, size } => {
            show_tooltip(input, row, size)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
