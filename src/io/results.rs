//! Read/write benchmark JSON files.
//!
//! Benchmark JSON is the "portable" representation of a suite run:
//! - the estimation rows themselves
//! - run metadata (tool, generation time, per-algorithm budget)
//!
//! `pilab report` reloads these files for presentation without recomputing.
//! The schema is defined by `domain::EstimationsFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::domain::{Estimation, EstimationsFile};
use crate::error::AppError;

/// Write a benchmark JSON file.
pub fn write_estimations_json(
    path: &Path,
    estimations: &[Estimation],
    time_limit: f64,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create results JSON '{}': {e}", path.display()))
    })?;

    let doc = EstimationsFile {
        tool: "pilab".to_string(),
        generated: Utc::now(),
        time_limit,
        estimations: estimations.to_vec(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::usage(format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Read a benchmark JSON file.
pub fn read_estimations_json(path: &Path) -> Result<EstimationsFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!("Failed to open results JSON '{}': {e}", path.display()))
    })?;
    let doc: EstimationsFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid results JSON: {e}")))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlgorithmClass, AlgorithmKind};

    #[test]
    fn results_json_round_trips() {
        let rows = vec![Estimation {
            id: 11,
            algorithm: AlgorithmKind::Bbp,
            class: AlgorithmClass::Numerical,
            pi_estimate: 3.141592653589793,
            correct_digits: 15,
            iterations: 50,
            time_seconds: 0.000107,
            iterations_per_second: 467_290.0,
            absolute_error: 0.0,
        }];

        let path = std::env::temp_dir().join(format!("pilab-results-{}.json", std::process::id()));
        write_estimations_json(&path, &rows, 1.0).unwrap();
        let doc = read_estimations_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(doc.tool, "pilab");
        assert_eq!(doc.time_limit, 1.0);
        assert_eq!(doc.estimations, rows);
    }

    #[test]
    fn reading_a_missing_file_fails_cleanly() {
        let err = read_estimations_json(Path::new("/nonexistent/pilab.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
