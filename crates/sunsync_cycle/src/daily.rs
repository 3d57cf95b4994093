//! Rise/set events for the three days around "now".

use chrono::{NaiveDate, NaiveDateTime};
use sunsync_base::{
    GeographicCoordinate, RiseAndSet, RiseSetResult, SolarError, sunrise_and_sunset_times,
};
use sunsync_time::{next_day, previous_day};

use crate::constants::CycleConstants;
use crate::error::CycleError;
use crate::interpolate::{CycleTime, interpolate_game_time};

/// Why interpolation is impossible on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateDay {
    NeverRises,
    NeverSets,
}

fn crossing(result: RiseSetResult) -> Result<RiseAndSet, DegenerateDay> {
    match result {
        RiseSetResult::Event(e) => Ok(e),
        RiseSetResult::NeverRises => Err(DegenerateDay::NeverRises),
        RiseSetResult::NeverSets => Err(DegenerateDay::NeverSets),
    }
}

/// Sunrise and sunset for yesterday, today and tomorrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEvents {
    pub date: NaiveDate,
    pub yesterday: RiseAndSet,
    pub today: RiseAndSet,
    pub tomorrow: RiseAndSet,
}

impl DailyEvents {
    /// Interpolate `now` against these events.
    pub fn interpolate(
        &self,
        now: NaiveDateTime,
        constants: &CycleConstants,
    ) -> Result<CycleTime, CycleError> {
        interpolate_game_time(
            &self.yesterday,
            &self.today,
            &self.tomorrow,
            now,
            &constants.day,
            &constants.night,
        )
    }
}

/// Either a full set of events or the polar condition that prevents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyEventsResult {
    Ready(DailyEvents),
    Degenerate(DegenerateDay),
}

/// Compute the events bracketing `date` at `location`.
///
/// Today's polar condition takes precedence, then yesterday's, then
/// tomorrow's. A day with its own sunrise and sunset is still degenerate
/// when a neighbour has none, since "now" cannot be bracketed.
pub fn daily_events(
    location: &GeographicCoordinate,
    date: NaiveDate,
) -> Result<DailyEventsResult, SolarError> {
    let today = sunrise_and_sunset_times(location, date)?;
    let yesterday = sunrise_and_sunset_times(location, previous_day(date)?)?;
    let tomorrow = sunrise_and_sunset_times(location, next_day(date)?)?;

    let assembled = crossing(today).and_then(|today| {
        Ok(DailyEvents {
            date,
            today,
            yesterday: crossing(yesterday)?,
            tomorrow: crossing(tomorrow)?,
        })
    });

    Ok(match assembled {
        Ok(events) => DailyEventsResult::Ready(events),
        Err(degenerate) => DailyEventsResult::Degenerate(degenerate),
    })
}

/// Game time at `now`, or the polar condition that replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameTime {
    Interpolated(CycleTime),
    Degenerate(DegenerateDay),
}

/// Compute the game time for `location` at the instant `now` (UTC).
pub fn game_time_at(
    location: &GeographicCoordinate,
    now: NaiveDateTime,
    constants: &CycleConstants,
) -> Result<GameTime, CycleError> {
    match daily_events(location, now.date())? {
        DailyEventsResult::Ready(events) => {
            Ok(GameTime::Interpolated(events.interpolate(now, constants)?))
        }
        DailyEventsResult::Degenerate(d) => Ok(GameTime::Degenerate(d)),
    }
}
