use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::deadline::DeadlineRequest;

/// The outcome of a deadline calculation.
///
/// `tentative` is the day the count landed on. `deadline` is that day rolled forward to a
/// business day and stamped with the end-of-day time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    request: DeadlineRequest,
    tentative: NaiveDateTime,
    deadline: NaiveDateTime,
}

impl DeadlineResult {
    pub(crate) fn new(
        request: DeadlineRequest,
        tentative: NaiveDateTime,
        deadline: NaiveDateTime,
    ) -> Self {
        DeadlineResult {
            request,
            tentative,
            deadline,
        }
    }

    pub fn request(&self) -> &DeadlineRequest {
        &self.request
    }

    /// The landing day of the count, before rolling off weekends and holidays.
    pub fn tentative(&self) -> NaiveDateTime {
        self.tentative
    }

    /// The deadline moment.
    pub fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    pub fn date(&self) -> NaiveDate {
        self.deadline.date()
    }

    /// Whether the landing day was a weekend or holiday and had to be moved.
    pub fn rolled(&self) -> bool {
        self.tentative.date() != self.deadline.date()
    }

    /// Long form text, e.g. `Monday, January 6, 2025 at 9:00 PM`.
    pub fn display_text(&self) -> String {
        self.deadline
            .format("%A, %B %-d, %Y at %-I:%M %p")
            .to_string()
    }

    /// Short form text for the clipboard, e.g. `1/6/2025, 9:00:00 PM`.
    pub fn copy_text(&self) -> String {
        self.deadline
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }

    /// The two lines of an exported deadline document: a title and the deadline.
    pub fn document_lines(&self, title: &str) -> [String; 2] {
        [title.to_string(), self.copy_text()]
    }
}

impl fmt::Display for DeadlineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}
