//! Four-pillar (四柱推命) chart calculations.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, and the five-element cycles
//! - Year, month, day and hour pillar derivation
//! - Five-element tally of the eight chart symbols
//! - Ten-gods classification relative to the day stem
//! - A plain-text report of the whole chart
//!
//! Month pillars use a fixed month-to-branch mapping rather than solar
//! terms, and day pillars count days from 1900-01-01 rather than a
//! historically verified epoch. Output is a pure function of the input.

pub mod branch;
pub mod chart;
pub mod element;
pub mod error;
pub mod five_elements;
pub mod pillar;
pub mod report;
pub mod stem;
pub mod ten_gods;

pub use branch::{ALL_BRANCHES, Branch, branch_from_hour};
pub use chart::{BirthInfo, Chart, ChartConfig, FourPillars, compute_chart};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::ChartError;
pub use five_elements::{
    ALL_POSITIONS, ComponentKind, ElementMember, FiveElementTally, PillarPosition,
};
pub use pillar::{
    Pillar, YEAR_CYCLE_OFFSET, day_pillar, day_pillar_for_date, hour_pillar, hour_stem_start,
    month_pillar, month_stem_start, year_pillar,
};
pub use report::{format_report, four_pillars_report, four_pillars_report_with};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{ALL_TEN_GODS, TenGod, TenGodsAnalysis, relation_of, ten_gods_table};

// Calendar layer re-exports, so callers need only this crate.
pub use sichu_time::{
    CalendarError, DateValidation, days_in_month, is_leap_year, total_days_since_epoch,
};
