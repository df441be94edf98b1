//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while benchmarking
//! - served as JSON by the REST API
//! - exported to JSON/CSV and reloaded later for reporting

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// π to 50 decimal places, used for the dashboard digits ticker.
///
/// The benchmark itself compares against `std::f64::consts::PI`; this longer
/// string exists purely for display.
pub const PI_DIGITS: &str = "3.14159265358979323846264338327950288419716939937510";

/// Maximum number of correct decimal digits an `f64` estimate can earn.
///
/// `f64` carries ~15.9 significant decimal digits, so digit counting is capped
/// at 15. Anything at the cap is reported as "perfect" precision.
pub const MAX_PRECISION_DIGITS: u32 = 15;

/// Hard ceiling for the iteration search.
pub const MAX_ITERATIONS: u64 = 100_000_000;

/// Broad family an estimator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmClass {
    Probability,
    InfiniteSeries,
    Numerical,
}

impl AlgorithmClass {
    /// Human-readable label for terminal output and table cells.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmClass::Probability => "Probability",
            AlgorithmClass::InfiniteSeries => "Infinite Series",
            AlgorithmClass::Numerical => "Numerical Methods",
        }
    }

    /// Single-letter marker used by the ASCII scatter plot.
    pub fn marker(self) -> char {
        match self {
            AlgorithmClass::Probability => 'P',
            AlgorithmClass::InfiniteSeries => 'S',
            AlgorithmClass::Numerical => 'N',
        }
    }
}

/// The twelve supported π estimators.
///
/// Ordinal ids (1..=12) follow catalog order and are stable across runs; the
/// REST API and exports key off `wire_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    MonteCarlo,
    Buffon,
    Coprimes,
    Leibniz,
    Euler,
    EulerKahan,
    Nilakantha,
    Ramanujan,
    Chudnovsky,
    GaussLegendre,
    Bbp,
    Borwein,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 12] = [
        AlgorithmKind::MonteCarlo,
        AlgorithmKind::Buffon,
        AlgorithmKind::Coprimes,
        AlgorithmKind::Leibniz,
        AlgorithmKind::Euler,
        AlgorithmKind::EulerKahan,
        AlgorithmKind::Nilakantha,
        AlgorithmKind::Ramanujan,
        AlgorithmKind::Chudnovsky,
        AlgorithmKind::GaussLegendre,
        AlgorithmKind::Bbp,
        AlgorithmKind::Borwein,
    ];

    /// 1-based id in catalog order.
    pub fn ordinal(self) -> u32 {
        Self::ALL
            .iter()
            .position(|&k| k == self)
            .map(|i| i as u32 + 1)
            .unwrap_or(0)
    }

    pub fn class(self) -> AlgorithmClass {
        match self {
            AlgorithmKind::MonteCarlo | AlgorithmKind::Buffon | AlgorithmKind::Coprimes => {
                AlgorithmClass::Probability
            }
            AlgorithmKind::Leibniz
            | AlgorithmKind::Euler
            | AlgorithmKind::EulerKahan
            | AlgorithmKind::Nilakantha
            | AlgorithmKind::Ramanujan
            | AlgorithmKind::Chudnovsky => AlgorithmClass::InfiniteSeries,
            AlgorithmKind::GaussLegendre | AlgorithmKind::Bbp | AlgorithmKind::Borwein => {
                AlgorithmClass::Numerical
            }
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            AlgorithmKind::MonteCarlo => "Monte Carlo",
            AlgorithmKind::Buffon => "Buffon",
            AlgorithmKind::Coprimes => "Pi Coprimes",
            AlgorithmKind::Leibniz => "Leibniz",
            AlgorithmKind::Euler => "Euler",
            AlgorithmKind::EulerKahan => "Euler Kahan",
            AlgorithmKind::Nilakantha => "Nilakantha",
            AlgorithmKind::Ramanujan => "Ramanujan",
            AlgorithmKind::Chudnovsky => "Chudnovsky",
            AlgorithmKind::GaussLegendre => "Gauss-Legendre",
            AlgorithmKind::Bbp => "BBP",
            AlgorithmKind::Borwein => "Borwein",
        }
    }

    /// Stable kebab-case name used in URLs, JSON keys, and exports.
    pub fn wire_name(self) -> &'static str {
        match self {
            AlgorithmKind::MonteCarlo => "monte-carlo",
            AlgorithmKind::Buffon => "buffon",
            AlgorithmKind::Coprimes => "coprimes",
            AlgorithmKind::Leibniz => "leibniz",
            AlgorithmKind::Euler => "euler",
            AlgorithmKind::EulerKahan => "euler-kahan",
            AlgorithmKind::Nilakantha => "nilakantha",
            AlgorithmKind::Ramanujan => "ramanujan",
            AlgorithmKind::Chudnovsky => "chudnovsky",
            AlgorithmKind::GaussLegendre => "gauss-legendre",
            AlgorithmKind::Bbp => "bbp",
            AlgorithmKind::Borwein => "borwein",
        }
    }

    /// Parse a wire name (as it appears in `/api/pi/{algorithm}`).
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.wire_name() == name)
    }
}

/// One benchmark result row: the best run found for an algorithm within its
/// time budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimation {
    pub id: u32,
    pub algorithm: AlgorithmKind,
    pub class: AlgorithmClass,
    pub pi_estimate: f64,
    pub correct_digits: u32,
    pub iterations: u64,
    pub time_seconds: f64,
    pub iterations_per_second: f64,
    pub absolute_error: f64,
}

/// A saved benchmark file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationsFile {
    pub tool: String,
    pub generated: DateTime<Utc>,
    pub time_limit: f64,
    pub estimations: Vec<Estimation>,
}

/// Catalog entry for one algorithm: the formula and its background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaInfo {
    pub id: String,
    pub name: String,
    /// LaTeX source of the formula, rendered verbatim in terminal output.
    pub formula: String,
    pub description: String,
    pub deep_explanation: String,
    pub convergence: String,
    pub applications: String,
    pub complexity: String,
    pub year: String,
}

/// Summary entry served by `GET /api/v1/algorithms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    #[serde(default)]
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub class: AlgorithmClass,
    pub implementation: String,
}

/// The user-CRUD demo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// How the comparison table is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog order (ordinal id ascending).
    Id,
    /// Fastest first (time ascending).
    Speed,
    /// Most correct digits first.
    Precision,
    /// Highest iterations/second first.
    Efficiency,
}

impl SortKey {
    pub fn display_name(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Speed => "speed",
            SortKey::Precision => "precision",
            SortKey::Efficiency => "efficiency",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Id => SortKey::Speed,
            SortKey::Speed => SortKey::Precision,
            SortKey::Precision => SortKey::Efficiency,
            SortKey::Efficiency => SortKey::Id,
        }
    }
}

/// Which algorithm classes the comparison table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ClassFilter {
    All,
    Probability,
    InfiniteSeries,
    Numerical,
}

impl ClassFilter {
    pub fn matches(self, class: AlgorithmClass) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Probability => class == AlgorithmClass::Probability,
            ClassFilter::InfiniteSeries => class == AlgorithmClass::InfiniteSeries,
            ClassFilter::Numerical => class == AlgorithmClass::Numerical,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ClassFilter::All => "all",
            ClassFilter::Probability => "Probability",
            ClassFilter::InfiniteSeries => "Infinite Series",
            ClassFilter::Numerical => "Numerical Methods",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ClassFilter::All => ClassFilter::Probability,
            ClassFilter::Probability => ClassFilter::InfiniteSeries,
            ClassFilter::InfiniteSeries => ClassFilter::Numerical,
            ClassFilter::Numerical => ClassFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable_and_one_based() {
        assert_eq!(AlgorithmKind::MonteCarlo.ordinal(), 1);
        assert_eq!(AlgorithmKind::Borwein.ordinal(), 12);
        for (i, kind) in AlgorithmKind::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), i as u32 + 1);
        }
    }

    #[test]
    fn wire_names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(AlgorithmKind::from_wire_name(kind.wire_name()), Some(kind));
        }
        assert_eq!(AlgorithmKind::from_wire_name("archimedes"), None);
    }

    #[test]
    fn class_filter_matches() {
        assert!(ClassFilter::All.matches(AlgorithmClass::Probability));
        assert!(ClassFilter::Probability.matches(AlgorithmClass::Probability));
        assert!(!ClassFilter::Probability.matches(AlgorithmClass::Numerical));
        assert!(ClassFilter::InfiniteSeries.matches(AlgorithmKind::Leibniz.class()));
    }

    #[test]
    fn sort_key_cycles() {
        let mut key = SortKey::Id;
        for _ in 0..4 {
            key = key.next();
        }
        assert_eq!(key, SortKey::Id);
    }
}
