//! Error types for solar and lunar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sunsync_time::TimeError;

/// Errors from the Sun/Moon calculations.
///
/// Polar day and polar night are not errors; see
/// [`RiseSetResult`](crate::RiseSetResult).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Invalid geographic coordinate.
    InvalidCoordinate(&'static str),
    /// Error from calendar / time-of-day conversion.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SolarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidCoordinate(_) => None,
        }
    }
}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
