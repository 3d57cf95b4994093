//! Sources of "now", in UTC.
//!
//! [`OffsetClock`] lets an operator pretend the current time of day is
//! something else, e.g. to preview a sunset, without touching the system
//! clock.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::error::ClockError;

pub trait Clock {
    /// Current instant as a UTC calendar date-time.
    fn now(&self) -> NaiveDateTime;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Another clock shifted by a constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetClock<C = SystemClock> {
    base: C,
    offset: TimeDelta,
}

impl OffsetClock<SystemClock> {
    /// The unshifted system clock.
    pub fn system() -> Self {
        Self::new(SystemClock, TimeDelta::zero())
    }
}

impl Default for OffsetClock<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> OffsetClock<C> {
    pub fn new(base: C, offset: TimeDelta) -> Self {
        Self { base, offset }
    }

    /// Shift `base` so that it reads `time` right now, on the same date.
    pub fn reading(base: C, time: NaiveTime) -> Self {
        let offset = time - base.now().time();
        Self { base, offset }
    }

    pub fn offset(&self) -> TimeDelta {
        self.offset
    }

    pub fn is_shifted(&self) -> bool {
        !self.offset.is_zero()
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> NaiveDateTime {
        self.base.now() + self.offset
    }
}

/// Parse `HH:MM` or `HH:MM:SS` (UTC, 24-hour).
pub fn parse_clock_time(text: &str) -> Result<NaiveTime, ClockError> {
    let invalid = || ClockError::InvalidFormat(text.to_string());

    let parts: Vec<&str> = text.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(invalid());
    }
    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *field = part.parse().map_err(|_| invalid())?;
    }
    let [hour, minute, second] = fields;

    for (name, value, limit) in [("hour", hour, 24), ("minute", minute, 60), ("second", second, 60)] {
        if value >= limit {
            return Err(ClockError::OutOfRange { field: name, value });
        }
    }
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!(parse_clock_time("06:30"), Ok(NaiveTime::from_hms_opt(6, 30, 0).unwrap()));
        assert_eq!(
            parse_clock_time("23:59:59"),
            Ok(NaiveTime::from_hms_opt(23, 59, 59).unwrap())
        );
        assert_eq!(parse_clock_time("7:5"), Ok(NaiveTime::from_hms_opt(7, 5, 0).unwrap()));
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", "12", "12:", "1:2:3:4", "ab:cd", "-1:00", "12:00:0.5", "+1:00"] {
            assert!(
                matches!(parse_clock_time(text), Err(ClockError::InvalidFormat(_))),
                "{text:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse_clock_time("24:00"),
            Err(ClockError::OutOfRange { field: "hour", value: 24 })
        );
        assert_eq!(
            parse_clock_time("12:60"),
            Err(ClockError::OutOfRange { field: "minute", value: 60 })
        );
        assert_eq!(
            parse_clock_time("12:00:60"),
            Err(ClockError::OutOfRange { field: "second", value: 60 })
        );
    }

    #[test]
    fn offset_clock_reads_requested_time() {
        let base = FixedClock(at(10, 0, 0));
        let clock = OffsetClock::reading(base, NaiveTime::from_hms_opt(18, 45, 10).unwrap());
        assert_eq!(clock.now(), at(18, 45, 10));
        assert_eq!(clock.offset(), TimeDelta::seconds(8 * 3600 + 45 * 60 + 10));
    }

    #[test]
    fn offset_clock_can_move_backwards() {
        let clock = OffsetClock::reading(FixedClock(at(22, 0, 0)), NaiveTime::MIN);
        assert_eq!(clock.now(), at(0, 0, 0));
        assert!(clock.is_shifted());
    }

    #[test]
    fn system_offset_clock_is_unshifted() {
        assert!(!OffsetClock::system().is_shifted());
    }
}
