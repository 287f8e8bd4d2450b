use chrono::prelude::*;
use chrono::Days;
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::config::DeadlineConfig;
use crate::deadline::{CountingMode, DeadlineRequest, DeadlineResult};
use crate::error::{DeadlineError, Result};
use crate::scheduling::{Cal, DateRoll, FixedHolidays, HolidayProvider, HolidayYears, YearlyCal};

/// Computes contract deadlines from a start date and a day count.
///
/// The calculator holds no state between calls. The same request always produces the same
/// result.
///
/// # Examples
/// ```rust
/// # use wa_deadline::DeadlineCalculator;
/// let calculator = DeadlineCalculator::washington();
/// let result = calculator.compute_deadline(Some("2025-05-23"), Some("3")).unwrap();
/// assert_eq!(result.display_text(), "Tuesday, May 27, 2025 at 9:00 PM");
/// ```
#[derive(Debug, Clone)]
pub struct DeadlineCalculator<P: HolidayProvider = FixedHolidays> {
    provider: P,
    config: DeadlineConfig,
}

impl DeadlineCalculator<FixedHolidays> {
    /// A calculator over the Washington holiday table with the default policy.
    pub fn washington() -> Self {
        DeadlineCalculator::new(FixedHolidays::washington(), DeadlineConfig::default())
    }

    /// A calculator whose holiday table is named by `config.calendar`.
    pub fn from_config(config: DeadlineConfig) -> Result<Self> {
        config.validate()?;
        let provider = FixedHolidays::try_from_name(&config.calendar)?;
        Ok(DeadlineCalculator::new(provider, config))
    }
}

impl<P: HolidayProvider> DeadlineCalculator<P> {
    pub fn new(provider: P, config: DeadlineConfig) -> Self {
        DeadlineCalculator { provider, config }
    }

    pub fn config(&self) -> &DeadlineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build a request from raw form text under this calculator's policy.
    pub fn request(&self, start: Option<&str>, days: Option<&str>) -> Result<DeadlineRequest> {
        DeadlineRequest::parse(start, days, &self.config)
    }

    /// Parse the form inputs and compute the deadline.
    ///
    /// Missing or unparseable inputs produce an error and no deadline.
    pub fn compute_deadline(&self, start: Option<&str>, days: Option<&str>) -> Result<DeadlineResult> {
        let request = self.request(start, days)?;
        self.compute(&request)
    }

    /// Compute the deadline for a validated request.
    pub fn compute(&self, request: &DeadlineRequest) -> Result<DeadlineResult> {
        debug!(
            start = %request.start().date(),
            days = request.days(),
            mode = %request.mode(),
            holiday_years = %self.config.holiday_years,
            "computing deadline"
        );
        self.check_walk_fits(request)?;
        match self.config.holiday_years {
            HolidayYears::StartYear => {
                let holidays = self.provider.holidays_for(request.start().year());
                let cal = Cal::from_holiday_set(&holidays, self.provider.week_mask());
                self.compute_with(&cal, request)
            }
            HolidayYears::DateYear => self.compute_with(&YearlyCal::new(&self.provider), request),
        }
    }

    /// Reject a request whose count cannot be reached before chrono's last representable date.
    fn check_walk_fits(&self, request: &DeadlineRequest) -> Result<()> {
        let per_week = match request.mode() {
            CountingMode::CalendarDays => 7,
            CountingMode::BusinessDays => working_days_per_week(self.provider.week_mask()),
        };
        min_walk_span(request.days(), per_week)
            .and_then(|span| request.start().checked_add_days(Days::new(span)))
            .map(|_| ())
            .ok_or_else(|| DeadlineError::OutOfRange {
                start: request.start().date().to_string(),
            })
    }

    fn compute_with<C: DateRoll>(&self, cal: &C, request: &DeadlineRequest) -> Result<DeadlineResult> {
        let out_of_range = || DeadlineError::OutOfRange {
            start: request.start().date().to_string(),
        };
        let tentative = count_days(cal, request).ok_or_else(out_of_range)?;
        let landing = cal.roll_forward_bus_day(&tentative).ok_or_else(out_of_range)?;
        if landing != tentative {
            debug!(from = %tentative.date(), to = %landing.date(), "rolled landing day forward");
        }
        let deadline = landing.date().and_time(self.config.end_of_day_time()?);
        Ok(DeadlineResult::new(*request, tentative, deadline))
    }
}

/// Walk forward from the day after `start` until `days` days have been counted.
///
/// Under [`CountingMode::BusinessDays`](crate::deadline::CountingMode) only business days count.
/// Returns the day on which the count was reached, or `None` if the walk runs out of dates.
fn count_days<C: DateRoll>(cal: &C, request: &DeadlineRequest) -> Option<NaiveDateTime> {
    let skip = request.mode().skips_non_bus_days();
    let mut current = request.start().checked_add_days(Days::new(1))?;
    let mut counted: u32 = 0;
    loop {
        if !skip || cal.is_bus_day(&current) {
            counted += 1;
            trace!(date = %current.date(), counted, "counted day");
            if counted >= request.days() {
                return Some(current);
            }
        }
        current = current.checked_add_days(Days::new(1))?;
    }
}

fn working_days_per_week(week_mask: &[u8]) -> u64 {
    let weekend: HashSet<Weekday> = week_mask
        .iter()
        .filter_map(|v| Weekday::try_from(*v).ok())
        .collect();
    7 - weekend.len() as u64
}

/// The fewest calendar days a walk needs to count `days` days when at most `per_week` of every
/// seven consecutive days can count. `None` if no day can ever count.
fn min_walk_span(days: u32, per_week: u64) -> Option<u64> {
    let days = u64::from(days);
    if days == 0 {
        return Some(0);
    }
    if per_week == 0 {
        return None;
    }
    let full_weeks = (days - 1) / per_week;
    Some(full_weeks * 7 + (days - full_weeks * per_week))
}
