//! Classify dates into business days, weekends and holidays, and roll dates forward.
//!
//! # Calendars
//!
//! A holiday table for a single year is a [`HolidaySet`], produced by a [`HolidayProvider`]. The
//! pre-defined provider is [`FixedHolidays::washington`], the Washington State legal holidays
//! as fixed month and day pairs.
//!
//! Two calendar types implement the [`DateRoll`] trait:
//!
//! - [`Cal`]: an explicit list of holidays and a weekend mask. Built from one year's
//!   [`HolidaySet`] it reproduces a calendar that only knows the holidays of that year.
//! - [`YearlyCal`]: defers to a [`HolidayProvider`] and checks each date against the table of its
//!   own year.
//!
//! [`DateRoll`] provides the business day predicates and **rolling**, moving forward from a
//! non-business day to the next business day.
//!
//! ### Example
//! Memorial Day 2025 falls on Monday 26th May. Rolling Saturday 24th May forward skips the weekend
//! and the holiday.
//! ```rust
//! # use wa_deadline::scheduling::{ndt, Cal, DateRoll, FixedHolidays, HolidayProvider};
//! let provider = FixedHolidays::washington();
//! let cal = Cal::from_holiday_set(&provider.holidays_for(2025), provider.week_mask());
//! assert_eq!(Some(ndt(2025, 5, 27)), cal.roll_forward_bus_day(&ndt(2025, 5, 24)));
//! ```

mod calendars;

mod serde;

pub use crate::scheduling::calendars::{
    ndt, Cal, DateRoll, FixedHolidays, HolidayProvider, HolidaySet, HolidayYears, YearlyCal,
};
