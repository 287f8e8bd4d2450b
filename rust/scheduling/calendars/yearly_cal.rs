use chrono::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use crate::scheduling::{DateRoll, HolidayProvider, HolidaySet};

/// Which year's holiday table applies to a date examined during a walk.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolidayYears {
    /// Each date is checked against the table of its own year.
    #[default]
    DateYear,
    /// Every date is checked against the table of the walk's starting year only.
    StartYear,
}

impl fmt::Display for HolidayYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayYears::DateYear => write!(f, "date-year"),
            HolidayYears::StartYear => write!(f, "start-year"),
        }
    }
}

/// A business day calendar which derives its holidays year by year from a [`HolidayProvider`].
///
/// Unlike a [`Cal`](crate::scheduling::Cal) built from one year's table, a walk crossing
/// 31st December sees the holidays of the following year. The most recently used year's table is
/// kept, so the provider is only consulted again when a walk moves into a different year.
///
/// # Examples
/// ```rust
/// # use wa_deadline::scheduling::{ndt, DateRoll, FixedHolidays, YearlyCal};
/// let cal = YearlyCal::new(FixedHolidays::washington());
/// assert!(cal.is_holiday(&ndt(2026, 1, 1)));
/// assert_eq!(cal.roll_forward_bus_day(&ndt(2025, 12, 31)), Some(ndt(2025, 12, 31)));
/// ```
#[derive(Clone, Debug)]
pub struct YearlyCal<P: HolidayProvider> {
    provider: P,
    week_mask: HashSet<Weekday>,
    current: RefCell<Option<HolidaySet>>,
}

impl<P: HolidayProvider> YearlyCal<P> {
    pub fn new(provider: P) -> Self {
        let week_mask = provider
            .week_mask()
            .iter()
            .filter_map(|v| Weekday::try_from(*v).ok())
            .collect();
        YearlyCal {
            provider,
            week_mask,
            current: RefCell::new(None),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: HolidayProvider> DateRoll for YearlyCal<P> {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        let year = date.year();
        let mut current = self.current.borrow_mut();
        if current.as_ref().map(HolidaySet::year) != Some(year) {
            *current = Some(self.provider.holidays_for(year));
        }
        current.as_ref().is_some_and(|set| set.contains(date))
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{ndt, Cal, FixedHolidays};
    use std::cell::Cell;

    struct NoHolidays;

    impl HolidayProvider for NoHolidays {
        fn holidays_for(&self, year: i32) -> HolidaySet {
            HolidaySet::new(year, vec![])
        }
    }

    #[derive(Default)]
    struct CountingProvider {
        calls: Cell<u32>,
    }

    impl HolidayProvider for CountingProvider {
        fn holidays_for(&self, year: i32) -> HolidaySet {
            self.calls.set(self.calls.get() + 1);
            FixedHolidays::washington().holidays_for(year)
        }
    }

    #[test]
    fn test_holidays_follow_date_year() {
        let cal = YearlyCal::new(FixedHolidays::washington());
        assert!(cal.is_holiday(&ndt(2025, 12, 25)));
        assert!(cal.is_holiday(&ndt(2026, 1, 1)));
        assert!(cal.is_holiday(&ndt(1990, 7, 4)));
        assert!(!cal.is_holiday(&ndt(2026, 1, 2)));
    }

    #[test]
    fn test_differs_from_single_year_cal() {
        let provider = FixedHolidays::washington();
        let single = Cal::from_holiday_set(&provider.holidays_for(2025), provider.week_mask());
        let yearly = YearlyCal::new(provider);
        let new_year = ndt(2026, 1, 1); // Thursday
        assert!(single.is_bus_day(&new_year));
        assert!(yearly.is_non_bus_day(&new_year));
    }

    #[test]
    fn test_table_built_once_per_year() {
        let provider = CountingProvider::default();
        let cal = YearlyCal::new(&provider);
        // two full years of business days, 2025 and 2026
        let count = cal.bus_days_between(&ndt(2024, 12, 31), &ndt(2026, 12, 31));
        assert_eq!(count, 253 + 254);
        assert_eq!(provider.calls.get(), 2);
        assert!(cal.is_holiday(&ndt(2026, 12, 25)));
        assert_eq!(provider.calls.get(), 2);
        assert!(cal.is_holiday(&ndt(2025, 12, 25)));
        assert_eq!(provider.calls.get(), 3);
    }

    #[test]
    fn test_week_mask_converted_once() {
        let cal = YearlyCal::new(NoHolidays);
        assert_eq!(cal.week_mask.len(), 2);
        assert!(cal.week_mask.contains(&Weekday::Sat));
        assert!(cal.week_mask.contains(&Weekday::Sun));
    }

    #[test]
    fn test_weekends() {
        let cal = YearlyCal::new(NoHolidays);
        assert!(!cal.is_weekday(&ndt(2025, 1, 4))); // Saturday
        assert!(!cal.is_weekday(&ndt(2025, 1, 5))); // Sunday
        assert!(cal.is_weekday(&ndt(2025, 1, 6))); // Monday
        assert_eq!(cal.roll_forward_bus_day(&ndt(2025, 1, 4)), Some(ndt(2025, 1, 6)));
    }

    #[test]
    fn test_by_reference() {
        let provider = FixedHolidays::washington();
        let cal = YearlyCal::new(&provider);
        assert!(cal.is_holiday(&ndt(2025, 9, 1)));
        assert_eq!(cal.provider().holidays_for(2025).len(), 8);
    }

    #[test]
    fn test_holiday_years_display() {
        assert_eq!(HolidayYears::default().to_string(), "date-year");
        assert_eq!(HolidayYears::StartYear.to_string(), "start-year");
    }
}
