//! Calendar arithmetic for four-pillar charts.
//!
//! This crate provides:
//! - Gregorian leap-year and month-length rules
//! - A 1-based day count from 1900-01-01, the basis of the day pillar
//! - Date validation with lenient and strict day-of-month modes

pub mod error;
pub mod gregorian;

pub use error::CalendarError;
pub use gregorian::{
    DateValidation, EPOCH_YEAR, days_in_month, days_in_year, is_leap_year,
    total_days_since_epoch, validate_date,
};
