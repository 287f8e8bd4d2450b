use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::scheduling::calendars::calendar::midnight;
use crate::scheduling::{DateRoll, HolidaySet};

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general business days. In
///   Washington, as elsewhere in the United States, these are `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week,
///   and cannot be business days.
///
/// A [`Cal`] built from a single year's [`HolidaySet`] knows nothing about other years. A walk
/// that crosses into a new year sees no holidays there.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDateTime>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector
    /// of days (0=Mon,.., 6=Sun) that are excluded from the working week. Values outside that
    /// range are ignored.
    pub fn new(holidays: Vec<NaiveDateTime>, week_mask: Vec<u8>) -> Self {
        Cal {
            holidays: holidays.iter().map(midnight).collect(),
            week_mask: week_mask
                .into_iter()
                .filter_map(|v| Weekday::try_from(v).ok())
                .collect(),
        }
    }

    /// Create a calendar from one year's holiday table.
    pub fn from_holiday_set(holidays: &HolidaySet, week_mask: &[u8]) -> Self {
        Cal::new(holidays.iter().copied().collect(), week_mask.to_vec())
    }

    /// The specific holidays of the calendar, in insertion order.
    pub fn holidays(&self) -> Vec<NaiveDateTime> {
        self.holidays.iter().copied().collect()
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.holidays.contains(&midnight(date))
    }
}
