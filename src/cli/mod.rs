//! Command-line parsing for the π estimation lab.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the estimation/benchmark code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AlgorithmKind, ClassFilter, SortKey};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pilab", version, about = "pi estimation lab: benchmarks, REST API, and TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Benchmark one algorithm and print a run summary.
    Run(RunArgs),
    /// Benchmark every algorithm and print the comparison table.
    Bench(BenchArgs),
    /// Re-render a previously exported benchmark JSON (no recomputation).
    Report(ReportArgs),
    /// Print the algorithm catalog.
    List(ListArgs),
    /// Run the REST API server.
    Serve(ServeArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same benchmark pipeline as `pilab bench`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Options for benchmarking a single algorithm.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Which algorithm to run.
    #[arg(value_enum)]
    pub algorithm: AlgorithmKind,

    /// Wall-clock budget per algorithm (seconds).
    #[arg(long, default_value_t = 1.0)]
    pub time_limit: f64,

    /// Base seed for the probability estimators.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Print the result as JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}

/// Options for the full benchmark suite.
#[derive(Debug, Parser, Clone)]
pub struct BenchArgs {
    /// Wall-clock budget per algorithm (seconds).
    #[arg(long, default_value_t = 1.0)]
    pub time_limit: f64,

    /// Base seed for the probability estimators.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Table ordering.
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    pub sort: SortKey,

    /// Restrict the table to one algorithm class.
    #[arg(long, value_enum, default_value_t = ClassFilter::All)]
    pub class: ClassFilter,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full benchmark to JSON (reloadable with `pilab report`).
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for re-rendering a saved benchmark.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Benchmark JSON file produced by `pilab bench --export-json`.
    #[arg(value_name = "JSON")]
    pub results: PathBuf,

    /// Table ordering.
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    pub sort: SortKey,

    /// Restrict the table to one algorithm class.
    #[arg(long, value_enum, default_value_t = ClassFilter::All)]
    pub class: ClassFilter,
}

/// Options for the catalog listing.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Fetch the catalog from a running server instead of the built-in data.
    #[arg(long)]
    pub remote: bool,
}

/// Options for the REST API server.
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Port to listen on (falls back to PILAB_PORT, then 5000).
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind (falls back to PILAB_BIND, then 127.0.0.1).
    #[arg(long)]
    pub bind: Option<String>,

    /// Benchmark budget per algorithm in seconds (falls back to
    /// PILAB_TIME_LIMIT, then 0.25).
    #[arg(long)]
    pub time_limit: Option<f64>,

    /// Base seed for the probability estimators.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Options for the TUI.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Wall-clock budget per algorithm (seconds) when benchmarking from the TUI.
    #[arg(long, default_value_t = 0.25)]
    pub time_limit: f64,

    /// Base seed for the probability estimators.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
