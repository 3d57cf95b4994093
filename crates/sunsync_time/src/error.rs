//! Error types for calendar and time-of-day conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Errors from calendar or time-of-day conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Stepping from this date leaves the representable calendar range.
    DateOutOfRange(NaiveDate),
    /// A conversion produced a time of day that does not exist.
    InvalidTimeOfDay { hour: u32, minute: u32, second: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange(date) => write!(f, "date out of range: {date}"),
            Self::InvalidTimeOfDay {
                hour,
                minute,
                second,
            } => write!(f, "invalid time of day {hour:02}:{minute:02}:{second:02}"),
        }
    }
}

impl Error for TimeError {}
