use serde::{Deserialize, Serialize};
use std::fmt;

/// Day counts at or below this count calendar days; longer periods count business days only.
pub const CALENDAR_DAY_THRESHOLD: u32 = 5;

/// Which days contribute to the count while walking towards a deadline.
///
/// Whatever the mode, the day the count lands on is rolled forward off weekends and holidays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingMode {
    /// Every calendar day counts.
    CalendarDays,
    /// Weekends and holidays are skipped.
    BusinessDays,
}

impl CountingMode {
    /// Select the mode for a period of `days` days.
    ///
    /// Short periods, `days <= threshold`, count calendar days.
    pub fn from_day_count(days: u32, threshold: u32) -> Self {
        if days <= threshold {
            CountingMode::CalendarDays
        } else {
            CountingMode::BusinessDays
        }
    }

    pub fn skips_non_bus_days(&self) -> bool {
        matches!(self, CountingMode::BusinessDays)
    }
}

impl fmt::Display for CountingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountingMode::CalendarDays => write!(f, "calendar days"),
            CountingMode::BusinessDays => write!(f, "business days"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let t = CALENDAR_DAY_THRESHOLD;
        assert_eq!(CountingMode::from_day_count(1, t), CountingMode::CalendarDays);
        assert_eq!(CountingMode::from_day_count(5, t), CountingMode::CalendarDays);
        assert_eq!(CountingMode::from_day_count(6, t), CountingMode::BusinessDays);
        assert_eq!(CountingMode::from_day_count(21, t), CountingMode::BusinessDays);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(CountingMode::from_day_count(5, 3), CountingMode::BusinessDays);
        assert_eq!(CountingMode::from_day_count(3, 3), CountingMode::CalendarDays);
    }

    #[test]
    fn test_skips() {
        assert!(!CountingMode::CalendarDays.skips_non_bus_days());
        assert!(CountingMode::BusinessDays.skips_non_bus_days());
    }
}
