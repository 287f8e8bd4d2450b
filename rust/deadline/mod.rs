//! Compute a contract deadline from a start date and a number of days.
//!
//! # Counting
//!
//! The period begins the day after the start date. Each day is examined in turn until the day
//! count is reached:
//!
//! - periods of [`CALENDAR_DAY_THRESHOLD`] days or fewer count every calendar day,
//! - longer periods count only business days, skipping weekends and holidays.
//!
//! The [`CountingMode`] is fixed once per [`DeadlineRequest`]. The landing day is then rolled
//! forward off any weekend or holiday, whichever mode counted it, and stamped with the end-of-day
//! time (9:00 PM by default).
//!
//! ### Example
//! Memorial Day 2025 is Monday 26th May. Three calendar days from Friday 23rd May land on it, so
//! the deadline moves to Tuesday.
//! ```rust
//! # use wa_deadline::{DeadlineCalculator, CountingMode};
//! # use wa_deadline::scheduling::ndt;
//! let calculator = DeadlineCalculator::washington();
//! let result = calculator.compute_deadline(Some("2025-05-23"), Some("3")).unwrap();
//! assert_eq!(result.request().mode(), CountingMode::CalendarDays);
//! assert_eq!(result.tentative(), ndt(2025, 5, 26));
//! assert_eq!(result.copy_text(), "5/27/2025, 9:00:00 PM");
//! ```

mod calculator;
mod mode;
mod request;
mod result;
mod timeline;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::deadline::{
    calculator::DeadlineCalculator,
    mode::{CountingMode, CALENDAR_DAY_THRESHOLD},
    request::{parse_day_count, parse_start_date, DeadlineRequest},
    result::DeadlineResult,
    timeline::Timeline,
};
