//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - algorithm identity enums (`AlgorithmKind`, `AlgorithmClass`)
//! - benchmark records (`Estimation`, `EstimationsFile`)
//! - catalog entries (`FormulaInfo`)
//! - the user-CRUD record (`User`)
//! - presentation knobs (`SortKey`, `ClassFilter`)

pub mod types;

pub use types::*;
