mod cal;
mod calendar;
mod dateroll;
mod holidays;
mod named;
mod yearly_cal;

pub use crate::scheduling::calendars::{
    cal::Cal,
    calendar::ndt,
    dateroll::DateRoll,
    holidays::{FixedHolidays, HolidayProvider, HolidaySet},
    yearly_cal::{HolidayYears, YearlyCal},
};
