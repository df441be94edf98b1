//! Input/output helpers.
//!
//! - benchmark CSV exports (`export`)
//! - benchmark JSON read/write (`results`)

pub mod export;
pub mod results;

pub use export::*;
pub use results::*;
