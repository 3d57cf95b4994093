//! Error types for game-time interpolation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use sunsync_base::SolarError;
use sunsync_time::TimeError;

/// Errors from mapping real time onto the game cycle.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CycleError {
    /// Error from the rise/set calculation.
    Solar(SolarError),
    /// The bracketing events do not span a positive interval.
    EmptyInterval {
        last: NaiveDateTime,
        next: NaiveDateTime,
    },
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar(e) => write!(f, "solar error: {e}"),
            Self::EmptyInterval { last, next } => {
                write!(f, "empty interval between events {last} and {next}")
            }
        }
    }
}

impl Error for CycleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Solar(e) => Some(e),
            Self::EmptyInterval { .. } => None,
        }
    }
}

impl From<SolarError> for CycleError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}

impl From<TimeError> for CycleError {
    fn from(e: TimeError) -> Self {
        Self::Solar(SolarError::Time(e))
    }
}
