//! Per-day cache of rise/set events.

use chrono::NaiveDate;
use sunsync_base::{GeographicCoordinate, SolarError};
use sunsync_cycle::{DailyEventsResult, daily_events};

/// Holds the events of one UTC date until the date changes.
#[derive(Debug, Clone, Default)]
pub struct EventCache {
    entry: Option<(NaiveDate, DailyEventsResult)>,
}

impl EventCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for `date`, computing them when the cached date differs.
    ///
    /// The flag is `true` when the events were recomputed.
    pub fn events(
        &mut self,
        location: &GeographicCoordinate,
        date: NaiveDate,
    ) -> Result<(DailyEventsResult, bool), SolarError> {
        if let Some((cached, result)) = self.entry {
            if cached == date {
                return Ok((result, false));
            }
        }
        let result = daily_events(location, date)?;
        self.entry = Some((date, result));
        Ok((result, true))
    }

    /// Date of the cached events, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.entry.map(|(date, _)| date)
    }

    /// Drop the cached events.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
