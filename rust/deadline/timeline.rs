use std::fmt;
use std::str::FromStr;

use crate::error::DeadlineError;

/// Named contract timelines with a pre-set number of days.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Timeline {
    /// No preset; the day count is supplied directly.
    Custom,
    /// Form 35 inspection contingency.
    Inspection,
    /// Form 22A financing contingency.
    Financing,
    /// Form 22A appraisal contingency.
    Appraisal,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Custom,
        Timeline::Inspection,
        Timeline::Financing,
        Timeline::Appraisal,
    ];

    /// The preset day count, if any.
    pub fn days(&self) -> Option<u32> {
        match self {
            Timeline::Custom => None,
            Timeline::Inspection => Some(5),
            Timeline::Financing => Some(21),
            Timeline::Appraisal => Some(10),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Timeline::Custom => "custom",
            Timeline::Inspection => "inspection",
            Timeline::Financing => "financing",
            Timeline::Appraisal => "appraisal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Custom => "Custom",
            Timeline::Inspection => "Inspection (Form 35 – 5 days)",
            Timeline::Financing => "Financing (Form 22A – 21 days)",
            Timeline::Appraisal => "Appraisal (Form 22A – 10 days)",
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeline {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Timeline::ALL
            .into_iter()
            .find(|t| t.name() == key)
            .ok_or_else(|| DeadlineError::Config {
                message: format!(
                    "'{}' is not a known timeline, expected one of: custom, inspection, financing, appraisal",
                    s
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_days() {
        assert_eq!(Timeline::Inspection.days(), Some(5));
        assert_eq!(Timeline::Financing.days(), Some(21));
        assert_eq!(Timeline::Appraisal.days(), Some(10));
        assert_eq!(Timeline::Custom.days(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Financing".parse::<Timeline>().unwrap(), Timeline::Financing);
        assert_eq!(" appraisal ".parse::<Timeline>().unwrap(), Timeline::Appraisal);
        assert!("closing".parse::<Timeline>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Timeline::Inspection.to_string(),
            "Inspection (Form 35 – 5 days)"
        );
    }
}
