use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DeadlineConfig;
use crate::deadline::CountingMode;
use crate::error::{DeadlineError, Result};

/// The validated inputs of one deadline calculation.
///
/// `start` is held at midnight, `days` is at least one, and `mode` is fixed once from `days`
/// when the request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    start: NaiveDateTime,
    days: u32,
    mode: CountingMode,
}

impl DeadlineRequest {
    /// Create a request from an already typed start date and day count.
    ///
    /// # Examples
    /// ```rust
    /// # use wa_deadline::{DeadlineConfig, DeadlineRequest, CountingMode};
    /// # use wa_deadline::scheduling::ndt;
    /// let request = DeadlineRequest::try_new(ndt(2025, 1, 1), 21, &DeadlineConfig::default());
    /// assert_eq!(request.unwrap().mode(), CountingMode::BusinessDays);
    /// ```
    pub fn try_new(start: NaiveDateTime, days: i64, config: &DeadlineConfig) -> Result<Self> {
        let days = u32::try_from(days)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| DeadlineError::InvalidDayCount {
                input: days.to_string(),
            })?;
        Ok(DeadlineRequest {
            start: start.date().and_time(NaiveTime::MIN),
            days,
            mode: CountingMode::from_day_count(days, config.calendar_day_threshold),
        })
    }

    /// Create a request from raw form text.
    ///
    /// Absent or blank fields give [`DeadlineError::MissingInput`]; see [`parse_day_count`] and
    /// [`parse_start_date`] for the accepted formats.
    pub fn parse(start: Option<&str>, days: Option<&str>, config: &DeadlineConfig) -> Result<Self> {
        let start = match start.map(str::trim) {
            None | Some("") => return Err(DeadlineError::MissingInput { field: "start date" }),
            Some(s) => parse_start_date(s)?,
        };
        let days = match days {
            None => return Err(DeadlineError::MissingInput { field: "day count" }),
            Some(s) => parse_day_count(s)?,
        };
        Self::try_new(start, i64::from(days), config)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn mode(&self) -> CountingMode {
        self.mode
    }
}

/// Read a day count the way a lenient form field does.
///
/// Surrounding whitespace is ignored and the leading run of digits is read, so `"21 days"` is 21
/// and `"5.7"` is 5. Input with no leading digits, zero, or a negative count is rejected.
pub fn parse_day_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DeadlineError::MissingInput { field: "day count" });
    }
    let invalid = || DeadlineError::InvalidDayCount {
        input: input.to_string(),
    };
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() || negative {
        return Err(invalid());
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}

/// Read a start date as `YYYY-MM-DD`, or a `YYYY-MM-DDTHH:MM[:SS]` timestamp whose time is dropped.
pub fn parse_start_date(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date().and_time(NaiveTime::MIN))
        .ok_or_else(|| DeadlineError::InvalidStartDate {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    fn config() -> DeadlineConfig {
        DeadlineConfig::default()
    }

    #[test]
    fn test_parse_day_count() {
        assert_eq!(parse_day_count("21").unwrap(), 21);
        assert_eq!(parse_day_count("  5 ").unwrap(), 5);
        assert_eq!(parse_day_count("+10").unwrap(), 10);
        assert_eq!(parse_day_count("21 days").unwrap(), 21);
        assert_eq!(parse_day_count("5.7").unwrap(), 5);
    }

    #[test]
    fn test_parse_day_count_rejects() {
        for input in ["abc", "0", "-3", "d5", ".5", "99999999999"] {
            assert!(
                matches!(
                    parse_day_count(input),
                    Err(DeadlineError::InvalidDayCount { .. })
                ),
                "{} should be rejected",
                input
            );
        }
        assert!(matches!(
            parse_day_count("   "),
            Err(DeadlineError::MissingInput { .. })
        ));
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2025-01-01").unwrap(), ndt(2025, 1, 1));
        assert_eq!(
            parse_start_date("2025-05-23T14:30").unwrap(),
            ndt(2025, 5, 23)
        );
        assert_eq!(
            parse_start_date("2025-05-23 14:30:00").unwrap(),
            ndt(2025, 5, 23)
        );
        assert!(matches!(
            parse_start_date("05/23/2025"),
            Err(DeadlineError::InvalidStartDate { .. })
        ));
        assert!(parse_start_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_request() {
        let request = DeadlineRequest::parse(Some("2025-01-01"), Some("5"), &config()).unwrap();
        assert_eq!(request.start(), ndt(2025, 1, 1));
        assert_eq!(request.days(), 5);
        assert_eq!(request.mode(), CountingMode::CalendarDays);
    }

    #[test]
    fn test_parse_request_missing() {
        let c = config();
        assert!(matches!(
            DeadlineRequest::parse(None, Some("5"), &c),
            Err(DeadlineError::MissingInput { field: "start date" })
        ));
        assert!(matches!(
            DeadlineRequest::parse(Some(""), Some("5"), &c),
            Err(DeadlineError::MissingInput { field: "start date" })
        ));
        assert!(matches!(
            DeadlineRequest::parse(Some("2025-01-01"), None, &c),
            Err(DeadlineError::MissingInput { field: "day count" })
        ));
        assert!(matches!(
            DeadlineRequest::parse(Some("2025-01-01"), Some(""), &c),
            Err(DeadlineError::MissingInput { field: "day count" })
        ));
    }

    #[test]
    fn test_try_new_rejects_non_positive() {
        let c = config();
        assert!(DeadlineRequest::try_new(ndt(2025, 1, 1), 0, &c).is_err());
        assert!(DeadlineRequest::try_new(ndt(2025, 1, 1), -1, &c).is_err());
        assert!(DeadlineRequest::try_new(ndt(2025, 1, 1), i64::MAX, &c).is_err());
    }

    #[test]
    fn test_try_new_strips_time() {
        let start = ndt(2025, 1, 1).with_hour(15).unwrap();
        let request = DeadlineRequest::try_new(start, 6, &config()).unwrap();
        assert_eq!(request.start(), ndt(2025, 1, 1));
        assert_eq!(request.mode(), CountingMode::BusinessDays);
    }
}
