//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs benchmarks and prints reports/plots
//! - writes optional exports
//! - starts the REST server or the TUI

use clap::Parser;

use crate::cli::{BenchArgs, Command, ListArgs, ReportArgs, RunArgs, ServeArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pilab` binary.
pub fn run() -> Result<(), AppError> {
    // We want `pilab` and `pilab --seed 7` to behave like `pilab tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Bench(args) => handle_bench(args),
        Command::Report(args) => handle_report(args),
        Command::List(args) => handle_list(args),
        Command::Serve(args) => handle_serve(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let estimation = crate::bench::search_best(args.algorithm, args.time_limit, args.seed)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&estimation)
            .map_err(|e| AppError::runtime(format!("Failed to serialize result: {e}")))?;
        println!("{rendered}");
    } else {
        println!("{}", crate::report::format_run_summary(&estimation, args.time_limit));
    }

    Ok(())
}

fn handle_bench(args: BenchArgs) -> Result<(), AppError> {
    let run = pipeline::run_bench(args.time_limit, args.seed)?;
    let rows = crate::report::present(&run.estimations, args.class, args.sort);

    if rows.is_empty() {
        return Err(AppError::empty("No estimations matched the class filter."));
    }

    println!("{}", crate::report::format_comparison_table(&rows));

    if args.plot && !args.no_plot {
        let plot = crate::plot::render_ascii_scatter(&rows, args.width, args.height);
        println!("{plot}");
    }

    // Optional exports always carry the full, unfiltered suite.
    if let Some(path) = &args.export {
        crate::io::export::write_estimations_csv(path, &run.estimations)?;
    }
    if let Some(path) = &args.export_json {
        crate::io::results::write_estimations_json(path, &run.estimations, run.time_limit)?;
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let doc = crate::io::results::read_estimations_json(&args.results)?;
    let rows = crate::report::present(&doc.estimations, args.class, args.sort);

    if rows.is_empty() {
        return Err(AppError::empty("The results file has no estimations matching the filter."));
    }

    println!(
        "Benchmark from {} (budget {:.3}s/algorithm, generated {})\n",
        args.results.display(),
        doc.time_limit,
        doc.generated.format("%Y-%m-%d %H:%M:%S UTC"),
    );
    println!("{}", crate::report::format_comparison_table(&rows));

    Ok(())
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let entries: Vec<(crate::domain::AlgorithmKind, String)> = if args.remote {
        let client = crate::data::ApiClient::from_env();
        let summaries = client.fetch_algorithms()?;
        let mut entries = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let kind = crate::domain::AlgorithmKind::from_wire_name(&summary.name).ok_or_else(
                || AppError::runtime(format!("Server returned unknown algorithm '{}'.", summary.name)),
            )?;
            entries.push((kind, summary.description));
        }
        entries.sort_by_key(|(kind, _)| kind.ordinal());
        entries
    } else {
        crate::domain::AlgorithmKind::ALL
            .iter()
            .map(|&kind| (kind, crate::catalog::description(kind).to_string()))
            .collect()
    };

    println!("{}", crate::report::format_catalog(&entries));
    Ok(())
}

fn handle_serve(args: ServeArgs) -> Result<(), AppError> {
    let config = crate::server::ServeConfig::from_env(args.bind, args.port, args.time_limit, args.seed)?;
    crate::server::run(config)
}

/// Rewrite argv so `pilab` defaults to `pilab tui`.
///
/// Rules:
/// - `pilab`                    -> `pilab tui`
/// - `pilab --seed 7 ...`       -> `pilab tui --seed 7 ...`
/// - `pilab --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "run" | "bench" | "report" | "list" | "serve" | "tui"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["pilab"])), argv(&["pilab", "tui"]));
    }

    #[test]
    fn leading_flags_go_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["pilab", "--seed", "7"])),
            argv(&["pilab", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(
            rewrite_args(argv(&["pilab", "bench", "--sort", "speed"])),
            argv(&["pilab", "bench", "--sort", "speed"])
        );
        assert_eq!(rewrite_args(argv(&["pilab", "--help"])), argv(&["pilab", "--help"]));
    }
}
