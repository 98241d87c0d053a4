//! CLI argument definitions for tickplot.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `render` | Run a full render pass over a chart dataset |
//! | `focus` | Simulate a pointer move and print the legend |
//! | `sma` | Print only the moving-average series |
//!
//! # Examples
//!
//! ```bash
//! tickplot render sample-data.json --pretty
//! tickplot focus sample-data.json --at 2018-03-01
//! tickplot focus sample-data.json --x 420 --format table
//! tickplot sma sample-data.json --window 19 --start-date 2018-06-01
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Daily price chart pipeline: series, 50-day SMA, scales and crosshair legend.
#[derive(Debug, Parser)]
#[command(name = "tickplot", author, version, about = "Daily OHLCV chart pipeline")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log pipeline diagnostics to stderr. Ignored when RUST_LOG is set.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a render pass and print the frame (series, SMA, scales, paths, bars).
    Render(RenderArgs),

    /// Focus the record nearest a date or plot x coordinate.
    ///
    /// # Examples
    ///
    ///   tickplot focus data.json --at 2018-03-01
    ///   tickplot focus data.json --at 2018-03-01T14:30:00Z
    ///   tickplot focus data.json --x 420
    Focus(FocusArgs),

    /// Print the moving-average series.
    Sma(RenderArgs),
}

/// Options shared by every command that runs the pipeline.
#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// Chart dataset (Yahoo chart JSON).
    pub dataset: PathBuf,

    /// First date to plot (YYYY-MM-DD).
    #[arg(long, default_value = "2018-01-01")]
    pub start_date: String,

    /// Prior points averaged with the current one (49 = 50-day SMA).
    #[arg(long, default_value_t = 49)]
    pub window: usize,

    /// Outer canvas width in pixels.
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Outer canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Margin on every side of the plot area in pixels.
    #[arg(long, default_value_t = 50.0)]
    pub margin: f64,
}

/// Arguments for `render` and `sma`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub chart: ChartArgs,
}

/// Arguments for `focus`.
#[derive(Debug, Args)]
pub struct FocusArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Query date: YYYY-MM-DD or an RFC3339 UTC timestamp.
    #[arg(long, conflicts_with = "x", required_unless_present = "x")]
    pub at: Option<String>,

    /// Plot-area x coordinate in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,
}
