//! Reporting utilities: sorting, filtering, and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the benchmark code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::*;

use crate::domain::{ClassFilter, Estimation, SortKey};

/// Keep only the estimations whose class passes the filter.
pub fn filter_estimations(estimations: &[Estimation], filter: ClassFilter) -> Vec<Estimation> {
    estimations
        .iter()
        .filter(|e| filter.matches(e.class))
        .cloned()
        .collect()
}

/// Order estimations by the chosen key.
///
/// Comparator semantics match the comparison view: `speed` is time ascending,
/// `precision` is digits descending, `efficiency` is iterations/second
/// descending, and `id` restores catalog order.
pub fn sort_estimations(estimations: &mut [Estimation], key: SortKey) {
    match key {
        SortKey::Id => estimations.sort_by_key(|e| e.id),
        SortKey::Speed => estimations.sort_by(|a, b| {
            a.time_seconds
                .partial_cmp(&b.time_seconds)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::Precision => estimations.sort_by(|a, b| b.correct_digits.cmp(&a.correct_digits)),
        SortKey::Efficiency => estimations.sort_by(|a, b| {
            b.iterations_per_second
                .partial_cmp(&a.iterations_per_second)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}

/// Filter then sort, the presentation path shared by the CLI table, the TUI
/// comparison tab, and `pilab report`.
pub fn present(estimations: &[Estimation], filter: ClassFilter, key: SortKey) -> Vec<Estimation> {
    let mut out = filter_estimations(estimations, filter);
    sort_estimations(&mut out, key);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlgorithmClass, AlgorithmKind};

    fn estimation(kind: AlgorithmKind, digits: u32, time: f64, ips: f64) -> Estimation {
        Estimation {
            id: kind.ordinal(),
            algorithm: kind,
            class: kind.class(),
            pi_estimate: 3.14,
            correct_digits: digits,
            iterations: 100,
            time_seconds: time,
            iterations_per_second: ips,
            absolute_error: 0.001,
        }
    }

    fn sample() -> Vec<Estimation> {
        vec![
            estimation(AlgorithmKind::MonteCarlo, 3, 0.5, 1_000.0),
            estimation(AlgorithmKind::Leibniz, 6, 0.9, 3_000.0),
            estimation(AlgorithmKind::Bbp, 15, 0.1, 2_000.0),
        ]
    }

    #[test]
    fn filter_by_class() {
        let filtered = filter_estimations(&sample(), ClassFilter::Probability);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].algorithm, AlgorithmKind::MonteCarlo);

        let all = filter_estimations(&sample(), ClassFilter::All);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn sort_by_speed_is_time_ascending() {
        let mut rows = sample();
        sort_estimations(&mut rows, SortKey::Speed);
        assert_eq!(rows[0].algorithm, AlgorithmKind::Bbp);
        assert_eq!(rows[2].algorithm, AlgorithmKind::Leibniz);
    }

    #[test]
    fn sort_by_precision_is_digits_descending() {
        let mut rows = sample();
        sort_estimations(&mut rows, SortKey::Precision);
        assert_eq!(rows[0].algorithm, AlgorithmKind::Bbp);
        assert_eq!(rows[2].algorithm, AlgorithmKind::MonteCarlo);
    }

    #[test]
    fn sort_by_efficiency_is_ips_descending() {
        let mut rows = sample();
        sort_estimations(&mut rows, SortKey::Efficiency);
        assert_eq!(rows[0].algorithm, AlgorithmKind::Leibniz);
        assert_eq!(rows[2].algorithm, AlgorithmKind::MonteCarlo);
    }

    #[test]
    fn sort_by_id_restores_catalog_order() {
        let mut rows = sample();
        sort_estimations(&mut rows, SortKey::Speed);
        sort_estimations(&mut rows, SortKey::Id);
        assert_eq!(rows[0].algorithm, AlgorithmKind::MonteCarlo);
        assert_eq!(rows[2].algorithm, AlgorithmKind::Bbp);
    }

    #[test]
    fn present_filters_then_sorts() {
        let rows = present(&sample(), ClassFilter::InfiniteSeries, SortKey::Speed);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].class, AlgorithmClass::InfiniteSeries);
    }
}
