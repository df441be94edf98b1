//! Export benchmark results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::Estimation;
use crate::error::AppError;

pub const CSV_HEADER: &str =
    "id,algorithm,class,pi_estimate,correct_digits,iterations,time_seconds,iterations_per_second,absolute_error";

/// Write benchmark results to a CSV file.
pub fn write_estimations_csv(path: &Path, estimations: &[Estimation]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "{CSV_HEADER}")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    for e in estimations {
        writeln!(
            file,
            "{},{},{},{:.15},{},{},{:.6},{:.2},{:e}",
            e.id,
            e.algorithm.wire_name(),
            e.class.display_name(),
            e.pi_estimate,
            e.correct_digits,
            e.iterations,
            e.time_seconds,
            e.iterations_per_second,
            e.absolute_error,
        )
        .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
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
    fn csv_has_header_and_one_row_per_estimation() {
        let path = std::env::temp_dir().join(format!("pilab-export-{}.csv", std::process::id()));
        write_estimations_csv(&path, &[estimation()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("4,leibniz,Infinite Series,"));
    }
}
