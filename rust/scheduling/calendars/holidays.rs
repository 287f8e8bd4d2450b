use chrono::prelude::*;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scheduling::calendars::calendar::midnight;
use crate::scheduling::calendars::named::{get_holidays_by_name, get_weekmask_by_name, wa};

/// The observed holidays of a single year.
///
/// Dates are held at midnight in table order. Membership is tested on the calendar date only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HolidaySet {
    year: i32,
    dates: IndexSet<NaiveDateTime>,
}

impl HolidaySet {
    /// Create a set for `year` from its holiday dates.
    pub fn new(year: i32, dates: impl IntoIterator<Item = NaiveDateTime>) -> Self {
        HolidaySet {
            year,
            dates: dates.into_iter().map(|d| midnight(&d)).collect(),
        }
    }

    /// The year the set is scoped to.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: &NaiveDateTime) -> bool {
        self.dates.contains(&midnight(date))
    }

    /// The holidays keyed as ISO `YYYY-MM-DD` strings.
    pub fn iso_keys(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.dates.iter()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// A source of holiday tables, one year at a time.
///
/// Implementations must be deterministic: the same `year` always yields the same set.
pub trait HolidayProvider {
    /// Return the observed holidays falling in `year`.
    fn holidays_for(&self, year: i32) -> HolidaySet;

    /// Days of the week (0=Mon,.., 6=Sun) excluded from the working week.
    fn week_mask(&self) -> &[u8] {
        wa::WEEKMASK
    }
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for &P {
    fn holidays_for(&self, year: i32) -> HolidaySet {
        (**self).holidays_for(year)
    }

    fn week_mask(&self) -> &[u8] {
        (**self).week_mask()
    }
}

/// A holiday table of fixed `(month, day)` dates repeated every year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedHolidays {
    table: &'static [(u32, u32, &'static str)],
    week_mask: &'static [u8],
}

impl FixedHolidays {
    /// The Washington State legal holiday table.
    pub fn washington() -> Self {
        FixedHolidays {
            table: wa::HOLIDAYS,
            week_mask: wa::WEEKMASK,
        }
    }

    /// Load a pre-defined table by its short name, e.g. `"wa"`.
    pub fn try_from_name(name: &str) -> Result<Self> {
        let key = name.trim().to_lowercase();
        Ok(FixedHolidays {
            table: get_holidays_by_name(&key)?,
            week_mask: get_weekmask_by_name(&key)?,
        })
    }

    /// The name of the holiday falling on `date`, if it is one.
    pub fn holiday_name(&self, date: &NaiveDateTime) -> Option<&'static str> {
        self.table
            .iter()
            .find(|(m, d, _)| date.month() == *m && date.day() == *d)
            .map(|(_, _, name)| *name)
    }
}

impl Default for FixedHolidays {
    fn default() -> Self {
        FixedHolidays::washington()
    }
}

impl HolidayProvider for FixedHolidays {
    fn holidays_for(&self, year: i32) -> HolidaySet {
        // years beyond chrono's range produce no dates rather than an error
        HolidaySet::new(
            year,
            self.table.iter().filter_map(|(month, day, _)| {
                NaiveDate::from_ymd_opt(year, *month, *day).map(|d| d.and_time(NaiveTime::MIN))
            }),
        )
    }

    fn week_mask(&self) -> &[u8] {
        self.week_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    #[test]
    fn test_washington_2025() {
        let set = FixedHolidays::washington().holidays_for(2025);
        assert_eq!(set.year(), 2025);
        assert_eq!(
            set.iso_keys(),
            vec![
                "2025-01-01",
                "2025-01-20",
                "2025-02-17",
                "2025-05-26",
                "2025-07-04",
                "2025-09-01",
                "2025-11-27",
                "2025-12-25",
            ]
        );
    }

    #[test]
    fn test_same_year_same_set() {
        let provider = FixedHolidays::washington();
        assert_eq!(provider.holidays_for(1999), provider.holidays_for(1999));
        assert_ne!(provider.holidays_for(1999), provider.holidays_for(2000));
    }

    #[test]
    fn test_fixed_dates_every_year() {
        let set = FixedHolidays::washington().holidays_for(2031);
        assert!(set.contains(&ndt(2031, 1, 20)));
        assert!(set.contains(&ndt(2031, 11, 27)));
        assert!(!set.contains(&ndt(2025, 11, 27)));
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_contains_ignores_time() {
        let set = FixedHolidays::washington().holidays_for(2025);
        let evening = ndt(2025, 7, 4).with_hour(21).unwrap();
        assert!(set.contains(&evening));
    }

    #[test]
    fn test_extreme_year_is_empty() {
        let set = FixedHolidays::washington().holidays_for(i32::MAX);
        assert!(set.is_empty());
    }

    #[test]
    fn test_holiday_name() {
        let provider = FixedHolidays::washington();
        assert_eq!(provider.holiday_name(&ndt(2025, 5, 26)), Some("Memorial Day"));
        assert_eq!(provider.holiday_name(&ndt(2025, 5, 27)), None);
    }

    #[test]
    fn test_try_from_name() {
        assert_eq!(
            FixedHolidays::try_from_name(" WA ").unwrap(),
            FixedHolidays::washington()
        );
        assert!(FixedHolidays::try_from_name("ldn").is_err());
    }

    #[test]
    fn test_provider_by_reference() {
        let provider = FixedHolidays::washington();
        let by_ref = &provider;
        assert_eq!(by_ref.holidays_for(2025), provider.holidays_for(2025));
        assert_eq!(by_ref.week_mask(), &[5, 6]);
    }
}
