//! Wrapper module to export to Python using pyo3 bindings.

use chrono::NaiveDateTime;
use pyo3::prelude::*;

use crate::deadline::DeadlineCalculator;
use crate::scheduling::HolidayProvider;

/// Compute a Washington contract deadline.
///
/// Parameters
/// ----------
/// start: str
///     The mutual acceptance date as ``YYYY-MM-DD``.
/// days: str
///     The number of days in the period, as typed into a form.
///
/// Returns
/// -------
/// datetime or None
///     The deadline at 9:00 PM, or None if either input is missing or invalid.
#[pyfunction]
#[pyo3(name = "compute_deadline", signature = (start=None, days=None))]
pub(crate) fn compute_deadline_py(start: Option<&str>, days: Option<&str>) -> Option<NaiveDateTime> {
    DeadlineCalculator::washington()
        .compute_deadline(start, days)
        .ok()
        .map(|r| r.deadline())
}

/// Return the Washington holiday dates for a year.
///
/// Parameters
/// ----------
/// year: int
///
/// Returns
/// -------
/// list[datetime]
#[pyfunction]
#[pyo3(name = "holidays_for")]
pub(crate) fn holidays_for_py(year: i32) -> Vec<NaiveDateTime> {
    let calculator = DeadlineCalculator::washington();
    let holidays = calculator.provider().holidays_for(year);
    holidays.iter().copied().collect()
}
