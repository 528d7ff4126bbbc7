//! Birth input, chart configuration, and the assembled four-pillar chart.

use sichu_time::{DateValidation, total_days_since_epoch, validate_date};
use tracing::debug;

use crate::error::ChartError;
use crate::five_elements::{FiveElementTally, PillarPosition};
use crate::pillar::{Pillar, day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::ten_gods::TenGodsAnalysis;

/// Raw birth date and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInfo {
    /// CE year, 1900 or later.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour on the 24-hour clock, 0-23.
    pub hour: u32,
}

impl BirthInfo {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Check every precondition of the pillar derivations.
    pub fn validate(&self, config: &ChartConfig) -> Result<(), ChartError> {
        if self.hour > 23 {
            return Err(ChartError::InvalidHour { hour: self.hour });
        }
        validate_date(self.year, self.month, self.day, config.date_validation)?;
        Ok(())
    }
}

/// Configurable parameters for chart computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartConfig {
    /// Day-of-month checking. Default: lenient.
    pub date_validation: DateValidation,
}

impl ChartConfig {
    pub fn new(date_validation: DateValidation) -> Self {
        Self { date_validation }
    }

    /// Reject days beyond the length of the month.
    pub fn strict() -> Self {
        Self::new(DateValidation::Strict)
    }
}

/// The four pillars of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillar at a chart position.
    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// A fully computed chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub birth: BirthInfo,
    pub pillars: FourPillars,
    pub elements: FiveElementTally,
    pub ten_gods: TenGodsAnalysis,
}

/// Validate `birth` and derive the full chart.
#[tracing::instrument(level = "debug", skip(config))]
pub fn compute_chart(birth: &BirthInfo, config: &ChartConfig) -> Result<Chart, ChartError> {
    if let Err(e) = birth.validate(config) {
        debug!(error = %e, "birth input rejected");
        return Err(e);
    }

    let year = year_pillar(birth.year);
    let month = month_pillar(year.stem, birth.month);
    let total_days = total_days_since_epoch(birth.year, birth.month, birth.day);
    let day = day_pillar(total_days);
    let hour = hour_pillar(day.stem, birth.hour)
        .ok_or(ChartError::InvalidHour { hour: birth.hour })?;
    debug!(%year, %month, %day, %hour, total_days, "pillars derived");

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };
    let elements = FiveElementTally::from_pillars(&pillars.as_array());
    let ten_gods = TenGodsAnalysis::new(year.stem, month.stem, day.stem, hour.stem);

    Ok(Chart {
        birth: *birth,
        pillars,
        elements,
        ten_gods,
    })
}
