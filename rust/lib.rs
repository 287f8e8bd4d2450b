//! This is the documentation for wa-deadline
//!
//! Compute Washington real estate contract deadlines: count a number of days from mutual
//! acceptance, skipping weekends and legal holidays where the period calls for it, and land on a
//! business day at 9:00 PM.
//!
//! ```rust
//! # use wa_deadline::DeadlineCalculator;
//! let calculator = DeadlineCalculator::washington();
//! let result = calculator.compute_deadline(Some("2025-01-01"), Some("21")).unwrap();
//! assert_eq!(result.display_text(), "Friday, January 31, 2025 at 9:00 PM");
//! ```


pub mod config;
pub mod deadline;
pub mod error;
pub mod json;
pub mod logger;
pub mod scheduling;

pub use config::{DeadlineConfig, EndOfDay};
pub use deadline::{
    CountingMode, DeadlineCalculator, DeadlineRequest, DeadlineResult, Timeline,
};
pub use error::{DeadlineError, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use deadline::py::{compute_deadline_py, holidays_for_py};

    m.add_function(wrap_pyfunction!(compute_deadline_py, m)?)?;
    m.add_function(wrap_pyfunction!(holidays_for_py, m)?)?;
    Ok(())
}
