//! The synchronizer: real sun position in, game ticks out.

use chrono::NaiveDateTime;
use sunsync_base::{GeographicCoordinate, moon_phase};
use sunsync_config::{LocationSetting, RegionTable, SyncConfig};
use sunsync_cycle::{CycleConstants, DailyEventsResult, DayPeriod, DegenerateDay};
use tracing::{debug, info, warn};

use crate::cache::EventCache;
use crate::clock::Clock;
use crate::error::Result;
use crate::moon::moon_phase_to_cycle_day;
use crate::{MIDDAY_TICKS, MIDNIGHT_TICKS};

/// Result of one synchronization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Game time follows the real sun.
    Synchronized {
        ticks: u64,
        period: DayPeriod,
        moon_day: u8,
    },
    /// The sun does not cross the horizon; game time is pinned.
    Fallback { ticks: u64, reason: DegenerateDay },
    /// Periodic synchronization is paused.
    Paused,
}

impl SyncOutcome {
    /// Ticks to apply, if any.
    pub fn ticks(&self) -> Option<u64> {
        match self {
            Self::Synchronized { ticks, .. } | Self::Fallback { ticks, .. } => Some(*ticks),
            Self::Paused => None,
        }
    }
}

/// Fixed game time used when interpolation is impossible.
pub fn fallback_ticks(reason: DegenerateDay) -> u64 {
    match reason {
        DegenerateDay::NeverRises => MIDNIGHT_TICKS,
        DegenerateDay::NeverSets => MIDDAY_TICKS,
    }
}

pub struct Synchronizer<C> {
    config: SyncConfig,
    regions: RegionTable,
    location: GeographicCoordinate,
    clock: C,
    cache: EventCache,
    constants: CycleConstants,
    paused: bool,
}

impl<C: Clock> Synchronizer<C> {
    /// Build a synchronizer, resolving the configured location.
    pub fn new(config: SyncConfig, regions: RegionTable, clock: C) -> Result<Self> {
        let setting = config.location_setting()?;
        let location = setting.resolve(&regions);
        info!(
            location = %location,
            setting = %setting,
            interval_s = config.synchronization_interval_seconds,
            "synchronizer ready"
        );
        Ok(Self {
            config,
            regions,
            location,
            clock,
            cache: EventCache::new(),
            constants: CycleConstants::default(),
            paused: false,
        })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn location(&self) -> GeographicCoordinate {
        self.location
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Periodic step; does nothing while paused.
    pub fn tick(&mut self) -> Result<SyncOutcome> {
        if self.paused {
            return Ok(SyncOutcome::Paused);
        }
        self.synchronize_now()
    }

    /// Synchronize once, even while paused.
    pub fn synchronize_now(&mut self) -> Result<SyncOutcome> {
        let now = self.clock.now();
        self.debug_log(format_args!("the time is {} (UTC)", now.time()));

        let (events, fresh) = self.cache.events(&self.location, now.date())?;
        if fresh {
            self.log_events(&events);
        }

        let outcome = match events {
            DailyEventsResult::Ready(events) => {
                let cycle_time = events.interpolate(now, &self.constants)?;
                SyncOutcome::Synchronized {
                    ticks: cycle_time.value as u64,
                    period: cycle_time.period,
                    moon_day: moon_phase_to_cycle_day(moon_phase(now)),
                }
            }
            DailyEventsResult::Degenerate(reason) => {
                let ticks = fallback_ticks(reason);
                match reason {
                    DegenerateDay::NeverRises => {
                        warn!(ticks, "the sun will not rise today, setting game time to midnight")
                    }
                    DegenerateDay::NeverSets => {
                        warn!(ticks, "the sun will not set today, setting game time to midday")
                    }
                }
                SyncOutcome::Fallback { ticks, reason }
            }
        };

        if let Some(ticks) = outcome.ticks() {
            self.debug_log(format_args!("game time synchronized to {ticks}"));
        }
        Ok(outcome)
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("synchronization paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!("synchronization resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Change the location; cached events are dropped.
    pub fn set_location(&mut self, text: &str) -> Result<LocationSetting> {
        let setting = self.config.set_location(text)?;
        self.location = setting.resolve(&self.regions);
        self.cache.invalidate();
        info!(location = %self.location, setting = %setting, "location changed");
        Ok(setting)
    }

    pub fn set_synchronization_interval_seconds(&mut self, seconds: u64) -> Result<()> {
        self.config.set_synchronization_interval_seconds(seconds)?;
        info!(interval_s = seconds, "synchronization interval changed");
        Ok(())
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.config.debug_mode = enabled;
        info!(enabled, "debug mode changed");
    }

    /// Replace the clock. The next step recomputes events if the date moved.
    pub fn set_clock(&mut self, clock: C) {
        self.clock = clock;
        info!(now = %self.clock.now(), "clock changed");
    }

    fn log_events(&self, events: &DailyEventsResult) {
        match events {
            DailyEventsResult::Ready(ev) => {
                for (label, day) in [
                    ("yesterday", &ev.yesterday),
                    ("today", &ev.today),
                    ("tomorrow", &ev.tomorrow),
                ] {
                    self.debug_log(format_args!(
                        "{label}: rise {} (UTC), set {} (UTC)",
                        day.rise_utc, day.set_utc
                    ));
                }
            }
            DailyEventsResult::Degenerate(reason) => {
                self.debug_log(format_args!("no rise/set pair around today: {reason:?}"));
            }
        }
    }

    fn debug_log(&self, message: std::fmt::Arguments<'_>) {
        if self.config.debug_mode {
            debug!("{message}");
        }
    }
}
