//! Shared benchmark pipeline used by the CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate config -> run suite -> records
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::bench;
use crate::domain::Estimation;
use crate::error::AppError;

/// All computed outputs of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchOutput {
    pub estimations: Vec<Estimation>,
    pub time_limit: f64,
    pub seed: u64,
}

/// Execute the full benchmark suite and return the computed records.
pub fn run_bench(time_limit: f64, seed: u64) -> Result<BenchOutput, AppError> {
    if !(time_limit.is_finite() && time_limit > 0.0) {
        return Err(AppError::usage("Time limit must be a positive number of seconds."));
    }

    let estimations = bench::run_suite(time_limit, seed)?;
    if estimations.is_empty() {
        return Err(AppError::empty("Benchmark produced no estimations."));
    }

    Ok(BenchOutput {
        estimations,
        time_limit,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_bench_validates_the_budget() {
        assert!(run_bench(-1.0, 42).is_err());
        assert!(run_bench(f64::INFINITY, 42).is_err());
    }

    #[test]
    fn run_bench_produces_a_full_suite() {
        let output = run_bench(0.02, 42).unwrap();
        assert_eq!(output.estimations.len(), crate::domain::AlgorithmKind::ALL.len());
        assert_eq!(output.time_limit, 0.02);
    }
}
