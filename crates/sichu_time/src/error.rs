//! Error types for calendar arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar date validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year precedes the 1900 day-count epoch.
    YearOutOfRange { year: i32 },
    /// Month outside 1..=12.
    InvalidMonth { month: u32 },
    /// Day-of-month not accepted under the active validation mode.
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange { year } => write!(
                f,
                "year {year} is before the {} day-count epoch",
                crate::EPOCH_YEAR
            ),
            Self::InvalidMonth { month } => write!(f, "invalid month: {month} (expected 1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day: {year}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for CalendarError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_year_out_of_range() {
        let e = CalendarError::YearOutOfRange { year: 1899 };
        assert_eq!(e.to_string(), "year 1899 is before the 1900 day-count epoch");
    }

    #[test]
    fn display_invalid_day_pads() {
        let e = CalendarError::InvalidDay {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid day: 2023-02-30");
    }
}
