//! Result types for sunrise/sunset calculations.

use chrono::NaiveDateTime;

/// Sunrise and sunset instants in UTC.
///
/// Both instants carry the calendar date the calculation was requested for.
/// West of Greenwich the evening sunset can therefore fall before sunrise
/// on the same date: it is the sunset that belongs to the previous local
/// evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RiseAndSet {
    pub rise_utc: NaiveDateTime,
    pub set_utc: NaiveDateTime,
}

impl RiseAndSet {
    pub fn new(rise_utc: NaiveDateTime, set_utc: NaiveDateTime) -> Self {
        Self { rise_utc, set_utc }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetResult {
    /// The Sun crosses the horizon at the given instants.
    Event(RiseAndSet),
    /// Sun never rises during this day (polar night).
    NeverRises,
    /// Sun never sets during this day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// The rise/set pair, if the Sun crosses the horizon.
    pub fn event(self) -> Option<RiseAndSet> {
        match self {
            Self::Event(e) => Some(e),
            Self::NeverRises | Self::NeverSets => None,
        }
    }

    /// Whether this is a polar day or polar night.
    pub fn is_polar(self) -> bool {
        !matches!(self, Self::Event(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn event_accessor() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let pair = RiseAndSet::new(
            d.and_hms_opt(7, 0, 0).unwrap(),
            d.and_hms_opt(17, 0, 0).unwrap(),
        );
        assert_eq!(RiseSetResult::Event(pair).event(), Some(pair));
        assert!(!RiseSetResult::Event(pair).is_polar());
        assert_eq!(RiseSetResult::NeverRises.event(), None);
        assert!(RiseSetResult::NeverSets.is_polar());
    }
}
