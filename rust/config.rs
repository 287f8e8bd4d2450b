use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::deadline::CALENDAR_DAY_THRESHOLD;
use crate::error::{DeadlineError, Result};
use crate::json::JSON;
use crate::scheduling::HolidayYears;

/// Policy knobs for the deadline calculation.
///
/// Every field has a default matching the Washington reference behavior, so an empty TOML file
/// is a valid configuration:
///
/// ```toml
/// calendar = "wa"
/// calendar_day_threshold = 5
/// holiday_years = "date-year"
/// document_title = "Washington Real Estate Deadline"
///
/// [end_of_day]
/// hour = 21
/// minute = 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlineConfig {
    /// Short name of the holiday table.
    pub calendar: String,
    /// Day counts at or below this count calendar days, above it business days.
    pub calendar_day_threshold: u32,
    /// The time-of-day stamped onto every deadline.
    pub end_of_day: EndOfDay,
    /// Which year's holiday table applies when a walk crosses a year boundary.
    pub holiday_years: HolidayYears,
    /// Title line of the exported deadline document.
    pub document_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl Default for EndOfDay {
    fn default() -> Self {
        EndOfDay {
            hour: 21,
            minute: 0,
        }
    }
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        DeadlineConfig {
            calendar: "wa".to_string(),
            calendar_day_threshold: CALENDAR_DAY_THRESHOLD,
            end_of_day: EndOfDay::default(),
            holiday_years: HolidayYears::default(),
            document_title: "Washington Real Estate Deadline".to_string(),
        }
    }
}

impl DeadlineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DeadlineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.end_of_day.hour > 23 || self.end_of_day.minute > 59 {
            return Err(DeadlineError::Config {
                message: format!(
                    "end_of_day {:02}:{:02} is not a valid time of day",
                    self.end_of_day.hour, self.end_of_day.minute
                ),
            });
        }
        if self.calendar.trim().is_empty() {
            return Err(DeadlineError::Config {
                message: "calendar name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The deadline time-of-day, with zero seconds and milliseconds.
    pub fn end_of_day_time(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.end_of_day.hour, self.end_of_day.minute, 0).ok_or_else(|| {
            DeadlineError::Config {
                message: format!(
                    "end_of_day {:02}:{:02} is not a valid time of day",
                    self.end_of_day.hour, self.end_of_day.minute
                ),
            }
        })
    }
}

impl JSON for DeadlineConfig {}
