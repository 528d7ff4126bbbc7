//! Proleptic Gregorian leap rules and the 1900-based day count.
//!
//! The day count is 1-based: 1900-01-01 is day 1. It is the sole input to
//! the day pillar, so its exact value matters more than astronomical truth.

use crate::error::CalendarError;

/// First year covered by the day count.
pub const EPOCH_YEAR: i32 = 1900;

/// Month lengths for a common year, January first.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// How strictly the day-of-month is checked against the month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateValidation {
    /// Any day in 1..=31 is accepted; impossible dates such as Feb 30
    /// flow through the day count unchanged.
    #[default]
    Lenient,
    /// Day must not exceed [`days_in_month`].
    Strict,
}

/// Gregorian leap year: divisible by 4 and not by 100, or divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1 = January) of `year`.
///
/// Returns 0 for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        return 29;
    }
    match month {
        1..=12 => MONTH_LENGTHS[(month - 1) as usize],
        _ => 0,
    }
}

/// Days in `year` (365 or 366).
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Cumulative 1-based day count from 1900-01-01.
///
/// Sums full years from 1900 up to `year`, full months from January up to
/// `month`, then adds `day`. Unchecked: callers should run [`validate_date`]
/// first. For `year < 1900` the year loop is empty and the result is not
/// meaningful.
pub fn total_days_since_epoch(year: i32, month: u32, day: u32) -> i64 {
    let year_days: i64 = (EPOCH_YEAR..year).map(|y| days_in_year(y) as i64).sum();
    let month_days: i64 = (1..month).map(|m| days_in_month(year, m) as i64).sum();
    year_days + month_days + day as i64
}

/// Check a date against the day-count preconditions.
pub fn validate_date(
    year: i32,
    month: u32,
    day: u32,
    mode: DateValidation,
) -> Result<(), CalendarError> {
    if year < EPOCH_YEAR {
        return Err(CalendarError::YearOutOfRange { year });
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let max_day = match mode {
        DateValidation::Lenient => 31,
        DateValidation::Strict => days_in_month(year, month),
    };
    if day == 0 || day > max_day {
        return Err(CalendarError::InvalidDay { year, month, day });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_reference_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn month_lengths_sum_to_year() {
        for year in [1900, 2000, 2023, 2024] {
            let sum: u32 = (1..=12).map(|m| days_in_month(year, m)).sum();
            assert_eq!(sum, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn out_of_range_month_has_no_days() {
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(total_days_since_epoch(1900, 1, 1), 1);
        assert_eq!(total_days_since_epoch(1900, 1, 2), 2);
    }

    #[test]
    fn first_day_of_1901() {
        // 1900 is not a leap year
        assert_eq!(total_days_since_epoch(1900, 12, 31), 365);
        assert_eq!(total_days_since_epoch(1901, 1, 1), 366);
    }

    #[test]
    fn known_day_counts() {
        assert_eq!(total_days_since_epoch(1990, 5, 15), 33_007);
        assert_eq!(total_days_since_epoch(2000, 1, 1), 36_525);
        // Feb 2000 has 29 days
        assert_eq!(total_days_since_epoch(2000, 3, 1), 36_585);
        assert_eq!(total_days_since_epoch(2024, 12, 31), 45_656);
    }

    #[test]
    fn day_count_strictly_increasing() {
        let mut prev = 0;
        for year in 1900..1905 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let n = total_days_since_epoch(year, month, day);
                    assert_eq!(n, prev + 1, "{year}-{month}-{day}");
                    prev = n;
                }
            }
        }
    }

    #[test]
    fn lenient_accepts_feb_30() {
        assert!(validate_date(2023, 2, 30, DateValidation::Lenient).is_ok());
        // Rolls into March: same count as Mar 2
        assert_eq!(
            total_days_since_epoch(2023, 2, 30),
            total_days_since_epoch(2023, 3, 2)
        );
    }

    #[test]
    fn strict_rejects_feb_30() {
        assert_eq!(
            validate_date(2023, 2, 30, DateValidation::Strict),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 30
            })
        );
        assert!(validate_date(2024, 2, 29, DateValidation::Strict).is_ok());
        assert!(validate_date(2023, 2, 29, DateValidation::Strict).is_err());
    }

    #[test]
    fn rejects_day_zero_and_32() {
        for mode in [DateValidation::Lenient, DateValidation::Strict] {
            assert!(validate_date(2000, 1, 0, mode).is_err());
            assert!(validate_date(2000, 1, 32, mode).is_err());
        }
    }

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            validate_date(2000, 13, 1, DateValidation::Lenient),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            validate_date(2000, 0, 1, DateValidation::Lenient),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn rejects_pre_epoch_year() {
        assert_eq!(
            validate_date(1899, 12, 31, DateValidation::Lenient),
            Err(CalendarError::YearOutOfRange { year: 1899 })
        );
        assert!(validate_date(1900, 1, 1, DateValidation::Lenient).is_ok());
    }

    #[test]
    fn default_mode_is_lenient() {
        assert_eq!(DateValidation::default(), DateValidation::Lenient);
    }
}
