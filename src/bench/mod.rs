//! Precision-vs-time benchmarking.
//!
//! For each algorithm we search for the iteration count that earns the most
//! correct digits within a wall-clock budget:
//!
//! 1. probe a fixed ladder of small counts
//! 2. grow the count exponentially while digits keep improving
//! 3. fine-tune around the best count with a shrinking increment
//!
//! The search stops early on the digit cap, on a timeout, or when an
//! estimator goes non-finite (the fast series overflow their running ratios
//! long after `f64` precision has saturated).

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::algo;
use crate::domain::{
    AlgorithmKind, Estimation, MAX_ITERATIONS, MAX_PRECISION_DIGITS,
};
use crate::error::AppError;

/// Iteration ladder probed by the initial phase.
const PHASE1_COUNTS: [u64; 12] = [1, 2, 3, 4, 5, 10, 20, 50, 100, 200, 500, 1000];

/// Consecutive non-improving exponential steps before giving up.
const NO_IMPROVEMENT_THRESHOLD: u32 = 3;

/// Fine-refinement attempts around the best count.
const REFINE_ATTEMPTS: u32 = 10;

/// One timed estimator call.
#[derive(Debug, Clone, Copy)]
pub struct Execution {
    pub estimate: f64,
    pub seconds: f64,
    pub iterations: u64,
    pub digits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecStatus {
    Valid,
    Timeout,
    Invalid,
}

/// Count how many decimal digits of `estimate` agree with π.
///
/// Non-finite input scores zero. The result is clamped to
/// `MAX_PRECISION_DIGITS` because `f64` cannot certify more.
pub fn count_correct_digits(estimate: f64) -> u32 {
    if !estimate.is_finite() {
        return 0;
    }
    let error = (estimate - std::f64::consts::PI).abs().max(f64::MIN_POSITIVE);
    let digits = (-error.log10()).floor();
    if digits <= 0.0 {
        0
    } else {
        (digits as u32).min(MAX_PRECISION_DIGITS)
    }
}

/// Run one estimator call under the time budget.
///
/// The RNG is re-seeded per call so a (kind, seed, iterations) triple always
/// produces the same estimate regardless of what ran before it.
fn run_once(kind: AlgorithmKind, iterations: u64, seed: u64, time_limit: f64) -> (Execution, ExecStatus) {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(kind.ordinal() as u64));
    let start = Instant::now();
    let estimate = algo::estimate(kind, iterations, &mut rng);
    let seconds = start.elapsed().as_secs_f64();

    let execution = Execution {
        estimate,
        seconds,
        iterations,
        digits: count_correct_digits(estimate),
    };

    let status = if !estimate.is_finite() {
        ExecStatus::Invalid
    } else if seconds > time_limit {
        ExecStatus::Timeout
    } else {
        ExecStatus::Valid
    };

    (execution, status)
}

/// Growth schedule for the exponential phase: the closer the last run is to
/// the budget, the gentler the step.
fn next_iteration_count(current: u64, time_used: f64, time_limit: f64) -> u64 {
    if time_used < time_limit * 0.1 {
        current.saturating_mul(5)
    } else if time_used < time_limit * 0.3 {
        current.saturating_mul(2)
    } else if time_used < time_limit * 0.6 {
        (current as f64 * 1.3) as u64
    } else {
        current
    }
}

fn phase1_initial(kind: AlgorithmKind, seed: u64, time_limit: f64) -> (Option<Execution>, bool) {
    let mut best: Option<Execution> = None;
    for &n in &PHASE1_COUNTS {
        let (execution, status) = run_once(kind, n, seed, time_limit);
        if status != ExecStatus::Valid {
            break;
        }
        best = Some(execution);
        if execution.digits >= MAX_PRECISION_DIGITS {
            return (best, true);
        }
    }
    (best, false)
}

fn phase2_exponential(kind: AlgorithmKind, seed: u64, time_limit: f64, best: &mut Execution) -> bool {
    let mut current = best.iterations.saturating_mul(2);
    let mut no_improvement = 0u32;

    while no_improvement < NO_IMPROVEMENT_THRESHOLD {
        let (execution, status) = run_once(kind, current, seed, time_limit);
        if status != ExecStatus::Valid {
            break;
        }

        if execution.digits >= best.digits {
            *best = execution;
            no_improvement = 0;
            if execution.digits >= MAX_PRECISION_DIGITS {
                return true;
            }
        } else {
            no_improvement += 1;
        }

        let next = next_iteration_count(current, execution.seconds, time_limit);
        if next == current || next > MAX_ITERATIONS {
            break;
        }
        current = next;
    }

    false
}

fn phase3_refine(kind: AlgorithmKind, seed: u64, time_limit: f64, best: &mut Execution) {
    if best.digits >= MAX_PRECISION_DIGITS.saturating_sub(3) || best.seconds >= time_limit * 0.7 {
        return;
    }

    let mut increment = (best.iterations / 4).max(1);

    for _ in 0..REFINE_ATTEMPTS {
        let try_iterations = best.iterations.saturating_add(increment);
        let (execution, status) = run_once(kind, try_iterations, seed, time_limit);

        if status != ExecStatus::Valid {
            increment /= 2;
            if increment == 0 {
                break;
            }
            continue;
        }

        if execution.digits >= best.digits {
            *best = execution;
            if execution.digits >= MAX_PRECISION_DIGITS {
                return;
            }
        }
    }
}

/// Search for the best run of one algorithm within `time_limit` seconds.
pub fn search_best(kind: AlgorithmKind, time_limit: f64, seed: u64) -> Result<Estimation, AppError> {
    if !(time_limit.is_finite() && time_limit > 0.0) {
        return Err(AppError::usage("Time limit must be a positive number of seconds."));
    }

    let (best, reached_cap) = phase1_initial(kind, seed, time_limit);
    let Some(mut best) = best else {
        return Err(AppError::empty(format!(
            "{} produced no valid execution within {time_limit}s.",
            kind.display_name()
        )));
    };

    if !reached_cap {
        let capped = phase2_exponential(kind, seed, time_limit, &mut best);
        if !capped {
            phase3_refine(kind, seed, time_limit, &mut best);
        }
    }

    Ok(to_estimation(kind, &best))
}

/// Benchmark every algorithm in catalog order.
///
/// Algorithms run in parallel; the per-algorithm budget is wall-clock, so the
/// suite finishes in roughly `time_limit * ceil(12 / cores)` seconds.
pub fn run_suite(time_limit: f64, seed: u64) -> Result<Vec<Estimation>, AppError> {
    let results: Vec<Result<Estimation, AppError>> = AlgorithmKind::ALL
        .par_iter()
        .map(|&kind| search_best(kind, time_limit, seed))
        .collect();

    let mut out = Vec::with_capacity(results.len());
    for result in results {
        out.push(result?);
    }
    Ok(out)
}

fn to_estimation(kind: AlgorithmKind, best: &Execution) -> Estimation {
    let iterations_per_second = if best.seconds > 0.0 {
        best.iterations as f64 / best.seconds
    } else {
        0.0
    };

    Estimation {
        id: kind.ordinal(),
        algorithm: kind,
        class: kind.class(),
        pi_estimate: best.estimate,
        correct_digits: best.digits,
        iterations: best.iterations,
        time_seconds: best.seconds,
        iterations_per_second,
        absolute_error: (best.estimate - std::f64::consts::PI).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn digit_counting_boundaries() {
        assert_eq!(count_correct_digits(PI), MAX_PRECISION_DIGITS);
        assert_eq!(count_correct_digits(f64::NAN), 0);
        assert_eq!(count_correct_digits(f64::INFINITY), 0);
        assert_eq!(count_correct_digits(0.0), 0);
        assert_eq!(count_correct_digits(3.0), 0);
        assert_eq!(count_correct_digits(3.14), 2);
        assert_eq!(count_correct_digits(3.1415), 4);
    }

    #[test]
    fn growth_schedule_slows_near_the_budget() {
        assert_eq!(next_iteration_count(100, 0.01, 1.0), 500);
        assert_eq!(next_iteration_count(100, 0.2, 1.0), 200);
        assert_eq!(next_iteration_count(100, 0.5, 1.0), 130);
        assert_eq!(next_iteration_count(100, 0.9, 1.0), 100);
    }

    #[test]
    fn search_finds_digits_for_a_fast_series() {
        let estimation = search_best(AlgorithmKind::Chudnovsky, 0.5, 42).unwrap();
        // The plateau sits at the f64 rounding floor, a few ulp from π.
        assert!(estimation.correct_digits >= 13, "got {}", estimation.correct_digits);
        assert!(estimation.correct_digits <= MAX_PRECISION_DIGITS);
        assert!(estimation.iterations >= 1);
    }

    #[test]
    fn search_returns_something_for_a_slow_series() {
        let estimation = search_best(AlgorithmKind::Leibniz, 0.05, 42).unwrap();
        assert!(estimation.correct_digits >= 1);
        assert!(estimation.pi_estimate.is_finite());
    }

    #[test]
    fn search_rejects_a_bad_time_limit() {
        assert!(search_best(AlgorithmKind::Leibniz, 0.0, 42).is_err());
        assert!(search_best(AlgorithmKind::Leibniz, f64::NAN, 42).is_err());
    }

    #[test]
    fn suite_covers_every_algorithm_in_order() {
        let estimations = run_suite(0.02, 42).unwrap();
        assert_eq!(estimations.len(), AlgorithmKind::ALL.len());
        for (i, estimation) in estimations.iter().enumerate() {
            assert_eq!(estimation.id, i as u32 + 1);
            assert_eq!(estimation.algorithm, AlgorithmKind::ALL[i]);
        }
    }

    #[test]
    fn estimation_fields_are_consistent() {
        let estimation = search_best(AlgorithmKind::GaussLegendre, 0.1, 42).unwrap();
        assert!((estimation.absolute_error - (estimation.pi_estimate - PI).abs()).abs() < 1e-18);
        assert_eq!(estimation.class, AlgorithmKind::GaussLegendre.class());
    }
}
