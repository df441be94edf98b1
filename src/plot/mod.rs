//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! The scatter shows correct digits (y) against log10 of run time (x), with
//! one marker per algorithm class: `P` probability, `S` infinite series,
//! `N` numerical methods.

use crate::domain::{Estimation, MAX_PRECISION_DIGITS};

/// Floor for log-time mapping; anything faster plots at the left edge.
const MIN_LOG_TIME: f64 = -7.0;

/// Render the digits-vs-time scatter for a benchmark run.
pub fn render_ascii_scatter(estimations: &[Estimation], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = log_time_range(estimations).unwrap_or((MIN_LOG_TIME, 1.0));
    let y_max = MAX_PRECISION_DIGITS as f64;

    let mut grid = vec![vec![' '; width]; height];

    for e in estimations {
        let x = map_x(log_time(e.time_seconds), x_min, x_max, width);
        let y = map_y(e.correct_digits as f64, 0.0, y_max, height);
        grid[y][x] = e.class.marker();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: log10(time s)=[{x_min:.1}, {x_max:.1}] | digits=[0, {}] | P=probability S=series N=numerical\n",
        MAX_PRECISION_DIGITS
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn log_time(seconds: f64) -> f64 {
    if seconds > 0.0 {
        seconds.log10().max(MIN_LOG_TIME)
    } else {
        MIN_LOG_TIME
    }
}

fn log_time_range(estimations: &[Estimation]) -> Option<(f64, f64)> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    for e in estimations {
        let x = log_time(e.time_seconds);
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if min_x.is_finite() && max_x.is_finite() && max_x > min_x {
        Some((min_x, max_x))
    } else {
        None
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    ((width - 1) as f64 * u).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the grid.
    (height - 1) - ((height - 1) as f64 * u).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlgorithmClass, AlgorithmKind};

    fn estimation(kind: AlgorithmKind, digits: u32, time: f64) -> Estimation {
        Estimation {
            id: kind.ordinal(),
            algorithm: kind,
            class: kind.class(),
            pi_estimate: 3.14,
            correct_digits: digits,
            iterations: 10,
            time_seconds: time,
            iterations_per_second: 10.0,
            absolute_error: 0.01,
        }
    }

    #[test]
    fn scatter_has_requested_dimensions() {
        let rows = vec![
            estimation(AlgorithmKind::MonteCarlo, 3, 0.5),
            estimation(AlgorithmKind::Chudnovsky, 15, 1e-6),
        ];
        let plot = render_ascii_scatter(&rows, 40, 10);
        let lines: Vec<&str> = plot.lines().collect();
        // Header + grid rows.
        assert_eq!(lines.len(), 11);
        assert!(lines[1..].iter().all(|l| l.len() == 40));
    }

    #[test]
    fn markers_follow_the_class() {
        let rows = vec![
            estimation(AlgorithmKind::MonteCarlo, 3, 0.5),
            estimation(AlgorithmKind::Leibniz, 6, 0.01),
            estimation(AlgorithmKind::Bbp, 15, 1e-5),
        ];
        let plot = render_ascii_scatter(&rows, 40, 12);
        assert!(plot.contains('P'));
        assert!(plot.contains('S'));
        assert!(plot.contains('N'));
    }

    #[test]
    fn max_digits_land_on_the_top_row() {
        let rows = vec![
            estimation(AlgorithmKind::Chudnovsky, MAX_PRECISION_DIGITS, 1e-6),
            estimation(AlgorithmKind::MonteCarlo, 0, 0.5),
        ];
        let plot = render_ascii_scatter(&rows, 30, 8);
        let lines: Vec<&str> = plot.lines().collect();
        assert!(lines[1].contains(AlgorithmClass::InfiniteSeries.marker()));
        assert!(lines[8].contains(AlgorithmClass::Probability.marker()));
    }

    #[test]
    fn empty_input_still_renders_a_grid() {
        let plot = render_ascii_scatter(&[], 20, 5);
        assert_eq!(plot.lines().count(), 6);
    }
}
