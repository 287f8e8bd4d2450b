use chrono::prelude::*;
use chrono::Days;

/// Simple date classification into business days, weekends and holidays, and forward rolling.
///
/// All comparisons are made on the calendar date only. Time-of-day is ignored.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    ///
    /// Returns `None` only if the roll would step past the last representable date.
    fn roll_forward_bus_day(&self, date: &NaiveDateTime) -> Option<NaiveDateTime> {
        let mut new_date = *date;
        while self.is_non_bus_day(&new_date) {
            new_date = new_date.checked_add_days(Days::new(1))?;
        }
        Some(new_date)
    }

    /// Count the business days after `start` up to and including `end`.
    ///
    /// Returns zero if `end` is not after `start`.
    fn bus_days_between(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> u32 {
        let mut count = 0;
        let mut sample_date = *start;
        while let Some(next) = sample_date.checked_add_days(Days::new(1)) {
            if next.date() > end.date() {
                break;
            }
            if self.is_bus_day(&next) {
                count += 1;
            }
            sample_date = next;
        }
        count
    }

    /// Print a representation of the month of the object.
    ///
    /// Business days show their day number, weekends show `.` and holidays falling in the working
    /// week show `*`. Returns `None` for an invalid `month`.
    fn print_month(&self, year: i32, month: u32) -> Option<String> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };

        let blank = String::from("  ");
        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<String> = vec![blank.clone(); offset];
        for date in first.iter_days().take_while(|d| *d < next_month) {
            let date = date.and_time(NaiveTime::MIN);
            let cell = if self.is_bus_day(&date) {
                format!("{:>2}", date.day())
            } else if self.is_weekday(&date) {
                " *".to_string()
            } else {
                " .".to_string()
            };
            cells.push(cell);
        }
        cells.resize(42, blank);

        let mut output = format!("{:>15} {}\n", first.format("%B").to_string(), year);
        output += "Su Mo Tu We Th Fr Sa\n";
        for row in cells.chunks(7) {
            output += &row.join(" ");
            output += "\n";
        }
        Some(output)
    }

    /// Print a representation of a year of the object, four months abreast.
    fn print_year(&self, year: i32) -> Option<String> {
        let mut data: Vec<Vec<String>> = vec![];
        for month in 1..13 {
            data.push(
                self.print_month(year, month)?
                    .lines()
                    .map(|s| s.to_string())
                    .collect(),
            );
        }
        let mut output = "\n".to_string();
        for band in 0..3 {
            for line in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[band][line],
                    data[band + 3][line],
                    data[band + 6][line],
                    data[band + 9][line]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day   '.': Weekend   '*': Holiday\n";
        Some(output)
    }
}
