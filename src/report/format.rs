//! Formatted terminal output: the comparison table, single-run summaries,
//! and the catalog listing.

use crate::domain::{AlgorithmKind, Estimation, MAX_PRECISION_DIGITS, PI_DIGITS};

/// Format the comparison table (one row per estimation).
pub fn format_comparison_table(estimations: &[Estimation]) -> String {
    let mut out = String::new();

    out.push_str(
        format!(
            "{:>3} {:<16} {:<16} {:>18} {:>7} {:>12} {:>10} {:>14} {:>10}\n",
            "id", "algorithm", "class", "pi estimate", "digits", "iterations", "time (s)", "iters/s", "abs error"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<3} {:-<16} {:-<16} {:-<18} {:-<7} {:-<12} {:-<10} {:-<14} {:-<10}\n",
            "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for e in estimations {
        out.push_str(
            format!(
                "{:>3} {:<16} {:<16} {:>18.15} {:>7} {:>12} {:>10.6} {:>14.0} {:>10}\n",
                e.id,
                e.algorithm.display_name(),
                e.class.display_name(),
                e.pi_estimate,
                e.correct_digits,
                e.iterations,
                e.time_seconds,
                e.iterations_per_second,
                format_scientific(e.absolute_error),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format a single-run summary block.
pub fn format_run_summary(estimation: &Estimation, time_limit: f64) -> String {
    let mut out = String::new();

    out.push_str("=== pilab - pi estimation run ===\n");
    out.push_str(&format!("Algorithm: {}\n", estimation.algorithm.display_name()));
    out.push_str(&format!("Class: {}\n", estimation.class.display_name()));
    out.push_str(&format!("Time budget: {time_limit:.3}s\n"));
    out.push('\n');

    out.push_str(&format!("Estimate : {:.15}\n", estimation.pi_estimate));
    out.push_str(&format!("Actual pi: {:.15}\n", std::f64::consts::PI));
    out.push_str(&format!(
        "Correct digits: {}/{}{}\n",
        estimation.correct_digits,
        MAX_PRECISION_DIGITS,
        if estimation.correct_digits >= MAX_PRECISION_DIGITS {
            " (precision cap)"
        } else {
            ""
        }
    ));
    out.push_str(&format!("Iterations: {}\n", estimation.iterations));
    out.push_str(&format!("Time: {:.6}s\n", estimation.time_seconds));
    out.push_str(&format!(
        "Throughput: {:.0} iterations/s\n",
        estimation.iterations_per_second
    ));
    out.push_str(&format!(
        "Absolute error: {}\n",
        format_scientific(estimation.absolute_error)
    ));
    let relative = estimation.absolute_error / std::f64::consts::PI;
    out.push_str(&format!("Relative error: {}\n", format_scientific(relative)));

    out
}

/// Format the algorithm catalog listing for `pilab list`.
pub fn format_catalog(entries: &[(AlgorithmKind, String)]) -> String {
    let mut out = String::new();

    out.push_str(&format!("pi digits: {PI_DIGITS}\n\n"));
    out.push_str(
        format!("{:>3} {:<16} {:<16} {:>5}  {}\n", "id", "algorithm", "class", "year", "description")
            .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:-<3} {:-<16} {:-<16} {:-<5}  {:-<40}\n", "", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for (kind, description) in entries {
        out.push_str(
            format!(
                "{:>3} {:<16} {:<16} {:>5}  {}\n",
                kind.ordinal(),
                kind.display_name(),
                kind.class().display_name(),
                crate::catalog::year(*kind),
                description,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Compact numeric formatting: exact zero prints as "0", small magnitudes in
/// scientific notation, everything else with six decimals.
pub fn format_scientific(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < 1e-4 {
        return format!("{value:.2e}");
    }
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlgorithmClass, AlgorithmKind};

    fn estimation() -> Estimation {
        Estimation {
            id: 4,
            algorithm: AlgorithmKind::Leibniz,
            class: AlgorithmClass::InfiniteSeries,
            pi_estimate: 3.141592370450778,
            correct_digits: 6,
            iterations: 3_531_834,
            time_seconds: 0.999462,
            iterations_per_second: 3_533_735.0,
            absolute_error: 2.83e-7,
        }
    }

    #[test]
    fn scientific_formatting_matches_the_comparison_view() {
        assert_eq!(format_scientific(0.0), "0");
        assert_eq!(format_scientific(2.83e-7), "2.83e-7");
        assert_eq!(format_scientific(0.017259), "0.017259");
    }

    #[test]
    fn table_contains_the_row_fields() {
        let table = format_comparison_table(&[estimation()]);
        assert!(table.contains("Leibniz"));
        assert!(table.contains("Infinite Series"));
        assert!(table.contains("3531834"));
        assert!(table.contains("2.83e-7"));
    }

    #[test]
    fn run_summary_mentions_digits_and_errors() {
        let summary = format_run_summary(&estimation(), 1.0);
        assert!(summary.contains("Leibniz"));
        assert!(summary.contains("Correct digits: 6/15"));
        assert!(summary.contains("Absolute error: 2.83e-7"));
    }

    #[test]
    fn catalog_listing_shows_every_entry() {
        let entries: Vec<(AlgorithmKind, String)> = AlgorithmKind::ALL
            .iter()
            .map(|&k| (k, crate::catalog::description(k).to_string()))
            .collect();
        let listing = format_catalog(&entries);
        for kind in AlgorithmKind::ALL {
            assert!(listing.contains(kind.display_name()));
        }
    }
}
