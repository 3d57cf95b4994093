//! Synchronizer behaviour over realistic days.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sunsync_config::{RegionTable, SyncConfig};
use sunsync_cycle::{DayPeriod, DegenerateDay};
use sunsync_host::{
    FixedClock, MIDDAY_TICKS, MIDNIGHT_TICKS, OffsetClock, SyncError, SyncOutcome, Synchronizer,
};

fn instant(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn synchronizer<C: sunsync_host::Clock>(location: &str, clock: C) -> Synchronizer<C> {
    let mut config = SyncConfig::default();
    config.set_location(location).unwrap();
    Synchronizer::new(config, RegionTable::bundled(), clock).unwrap()
}

#[test]
fn madrid_equinox_day_and_night() {
    let mut sync = synchronizer("40.4168, -3.7038", FixedClock(instant(2024, 3, 20, 12, 22)));
    let SyncOutcome::Synchronized { ticks, period, .. } = sync.tick().unwrap() else {
        panic!("expected synchronization");
    };
    assert_eq!(period, DayPeriod::Day);
    // solar noon in Madrid is about 12:22 UTC
    assert!((29_500..30_500).contains(&ticks), "ticks = {ticks}");

    sync.set_clock(FixedClock(instant(2024, 3, 20, 23, 0)));
    let SyncOutcome::Synchronized { ticks, period, .. } = sync.tick().unwrap() else {
        panic!("expected synchronization");
    };
    assert_eq!(period, DayPeriod::Night);
    assert!((37_000..47_000).contains(&ticks), "ticks = {ticks}");
}

#[test]
fn ticks_increase_through_the_day() {
    let mut previous = 0;
    for hour in 6..18 {
        let mut sync = synchronizer("40.4168, -3.7038", FixedClock(instant(2024, 3, 20, hour, 30)));
        let ticks = sync.tick().unwrap().ticks().unwrap();
        assert!(ticks > previous, "{hour}:30 -> {ticks} after {previous}");
        previous = ticks;
    }
}

#[test]
fn polar_fallbacks() {
    let mut sync = synchronizer("69.65, 18.96", FixedClock(instant(2023, 12, 21, 12, 0)));
    assert_eq!(
        sync.tick().unwrap(),
        SyncOutcome::Fallback { ticks: MIDNIGHT_TICKS, reason: DegenerateDay::NeverRises }
    );

    sync.set_clock(FixedClock(instant(2023, 6, 21, 0, 0)));
    assert_eq!(
        sync.tick().unwrap(),
        SyncOutcome::Fallback { ticks: MIDDAY_TICKS, reason: DegenerateDay::NeverSets }
    );
}

#[test]
fn moon_day_tracks_full_moon() {
    // full moon on 2023-02-05
    let mut sync = synchronizer("40.4168, -3.7038", FixedClock(instant(2023, 2, 5, 12, 0)));
    let SyncOutcome::Synchronized { moon_day, .. } = sync.tick().unwrap() else {
        panic!("expected synchronization");
    };
    assert!(moon_day == 0 || moon_day == 7, "moon_day = {moon_day}");
}

#[test]
fn offset_clock_previews_sunset() {
    let base = FixedClock(instant(2024, 3, 20, 8, 0));
    let clock = OffsetClock::reading(base, NaiveTime::from_hms_opt(18, 24, 0).unwrap());
    let mut sync = synchronizer("40.4168, -3.7038", clock);
    let ticks = sync.tick().unwrap().ticks().unwrap();
    // Madrid sets at about 18:24:33 UTC that day
    assert!((36_900..=37_100).contains(&ticks), "ticks = {ticks}");
}

#[test]
fn invalid_settings_are_rejected() {
    let mut sync = synchronizer("0, 0", FixedClock(instant(2024, 1, 1, 0, 0)));
    assert!(matches!(sync.set_location("1.11.1"), Err(SyncError::Config(_))));
    assert!(matches!(
        sync.set_synchronization_interval_seconds(0),
        Err(SyncError::Config(_))
    ));
    assert_eq!(sync.config().synchronization_interval_seconds, 5);
}

mod properties {
    use proptest::prelude::*;
    use sunsync_host::{MOON_CYCLE_DAYS, moon_phase_to_cycle_day, parse_clock_time};

    proptest! {
        #[test]
        fn moon_day_is_within_cycle(phase in 0.0f64..1.0) {
            prop_assert!(moon_phase_to_cycle_day(phase) < MOON_CYCLE_DAYS);
        }

        #[test]
        fn clock_time_parses_back(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let text = format!("{h:02}:{m:02}:{s:02}");
            let time = parse_clock_time(&text).unwrap();
            prop_assert_eq!(time.format("%H:%M:%S").to_string(), text);
        }
    }
}
