//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sichu_time::CalendarError;

/// Errors from validating birth input before a chart is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Hour outside 0..=23.
    InvalidHour { hour: u32 },
    /// Date rejected by the calendar layer.
    Calendar(CalendarError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHour { hour } => write!(f, "invalid hour: {hour} (expected 0-23)"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::InvalidHour { .. } => None,
        }
    }
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
