//! Linear interpolation between the two solar events around "now".
//!
//! | `now`                    | period | last event      | next event      |
//! |--------------------------|--------|-----------------|-----------------|
//! | before today's sunrise   | night  | yesterday's set | today's rise    |
//! | after today's sunset     | night  | today's set     | tomorrow's rise |
//! | otherwise                | day    | today's rise    | today's set     |
//!
//! Elapsed time and interval length are counted in whole seconds.

use chrono::NaiveDateTime;
use sunsync_base::RiseAndSet;

use crate::constants::CycleSegment;
use crate::error::CycleError;

/// Whether the Sun is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Interpolated position on the game cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleTime {
    pub period: DayPeriod,
    /// Fraction of the current period elapsed.
    pub fraction: f64,
    /// Game time, `segment.start + segment.length · fraction`.
    pub value: f64,
    pub last_event: NaiveDateTime,
    pub next_event: NaiveDateTime,
}

/// Map `now` onto the game cycle from three consecutive days of events.
pub fn interpolate_game_time(
    yesterday: &RiseAndSet,
    today: &RiseAndSet,
    tomorrow: &RiseAndSet,
    now: NaiveDateTime,
    day: &CycleSegment,
    night: &CycleSegment,
) -> Result<CycleTime, CycleError> {
    let (period, last, next) = if now < today.rise_utc {
        (DayPeriod::Night, yesterday.set_utc, today.rise_utc)
    } else if now > today.set_utc {
        (DayPeriod::Night, today.set_utc, tomorrow.rise_utc)
    } else {
        (DayPeriod::Day, today.rise_utc, today.set_utc)
    };

    let interval = (next - last).num_seconds();
    if interval <= 0 {
        return Err(CycleError::EmptyInterval { last, next });
    }
    let elapsed = (now - last).num_seconds();
    let fraction = elapsed as f64 / interval as f64;

    let segment = match period {
        DayPeriod::Day => day,
        DayPeriod::Night => night,
    };

    Ok(CycleTime {
        period,
        fraction,
        value: segment.at(fraction),
        last_event: last,
        next_event: next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CycleConstants;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn pair(d: u32) -> RiseAndSet {
        RiseAndSet::new(at(d, 6, 0), at(d, 18, 0))
    }

    fn run(now: NaiveDateTime) -> Result<CycleTime, CycleError> {
        let c = CycleConstants::default();
        interpolate_game_time(&pair(9), &pair(10), &pair(11), now, &c.day, &c.night)
    }

    #[test]
    fn noon_is_midday() {
        let t = run(at(10, 12, 0)).unwrap();
        assert_eq!(t.period, DayPeriod::Day);
        assert_eq!(t.fraction, 0.5);
        assert_eq!(t.value, 30_000.0);
    }

    #[test]
    fn sunrise_starts_day() {
        let t = run(at(10, 6, 0)).unwrap();
        assert_eq!(t.period, DayPeriod::Day);
        assert_eq!(t.value, 23_000.0);
    }

    #[test]
    fn sunset_instant_is_still_day() {
        let t = run(at(10, 18, 0)).unwrap();
        assert_eq!(t.period, DayPeriod::Day);
        assert_eq!(t.value, 37_000.0);
    }

    #[test]
    fn before_sunrise_uses_yesterdays_set() {
        let t = run(at(10, 0, 0)).unwrap();
        assert_eq!(t.period, DayPeriod::Night);
        assert_eq!(t.last_event, at(9, 18, 0));
        assert_eq!(t.next_event, at(10, 6, 0));
        assert_eq!(t.fraction, 0.5);
        assert_eq!(t.value, 42_000.0);
    }

    #[test]
    fn after_sunset_uses_tomorrows_rise() {
        let t = run(at(10, 21, 0)).unwrap();
        assert_eq!(t.period, DayPeriod::Night);
        assert_eq!(t.last_event, at(10, 18, 0));
        assert_eq!(t.next_event, at(11, 6, 0));
        assert_eq!(t.fraction, 0.25);
        assert_eq!(t.value, 39_500.0);
    }

    #[test]
    fn sub_second_now_is_truncated() {
        let now = at(10, 12, 0) + chrono::Duration::milliseconds(900);
        assert_eq!(run(now).unwrap().value, 30_000.0);
    }

    #[test]
    fn empty_interval_rejected() {
        let c = CycleConstants::default();
        let flat = RiseAndSet::new(at(10, 12, 0), at(10, 12, 0));
        let err = interpolate_game_time(&flat, &flat, &flat, at(10, 12, 0), &c.day, &c.night)
            .unwrap_err();
        assert!(matches!(err, CycleError::EmptyInterval { .. }));
    }
}
