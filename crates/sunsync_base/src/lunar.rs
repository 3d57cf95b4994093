//! Lunar phase from a low-precision Moon theory.
//!
//! Mean orbital elements at the epoch 2010 January 0.0 plus the largest
//! periodic corrections (evection, annual equation, equation of centre,
//! variation). The phase is the Moon–Sun elongation as a fraction of a
//! full turn: 0 new, 0.25 first quarter, 0.5 full, 0.75 last quarter.

use chrono::{Datelike, NaiveDateTime};
use sunsync_time::{days_since_epoch_2010, fractional_day, modulo};

use crate::solar::{sun_ecliptic_longitude, sun_mean_anomaly};

/// Moon's mean longitude at the epoch, degrees.
const MEAN_LONGITUDE_AT_EPOCH_DEG: f64 = 91.929336;

/// Mean longitude of perigee at the epoch, degrees.
const PERIGEE_AT_EPOCH_DEG: f64 = 130.143076;

/// Daily motion of the mean longitude, degrees.
const MEAN_LONGITUDE_RATE_DEG: f64 = 13.1763966;

/// Daily motion of the perigee, degrees.
const PERIGEE_RATE_DEG: f64 = 0.1114041;

/// Phase of the Moon at `datetime` (UTC), in `[0, 1)`.
pub fn moon_phase(datetime: NaiveDateTime) -> f64 {
    let day = fractional_day(datetime);
    let (month, year) = (datetime.month(), datetime.year());

    let sun_m = sun_mean_anomaly(day, month, year).to_radians();
    let sun_lambda = sun_ecliptic_longitude(day, month, year);
    let d = days_since_epoch_2010(day, month, year);

    let l = modulo(MEAN_LONGITUDE_RATE_DEG * d + MEAN_LONGITUDE_AT_EPOCH_DEG, 360.0);
    let mm = modulo(l - PERIGEE_RATE_DEG * d - PERIGEE_AT_EPOCH_DEG, 360.0);

    let c = l - sun_lambda;
    let evection = 1.2739 * (2.0 * c - mm).to_radians().sin();
    let annual = 0.1858 * sun_m.sin();
    let a3 = 0.37 * sun_m.sin();
    let mm_corrected = (mm + evection - annual - a3).to_radians();
    let center = 6.2886 * mm_corrected.sin();
    let a4 = 0.214 * (2.0 * mm_corrected).sin();
    let l_corrected = l + evection + center - annual + a4;
    let variation = 0.6583 * (2.0 * (l_corrected - sun_lambda)).to_radians().sin();
    let l_true = l_corrected + variation;

    modulo(l_true - sun_lambda, 360.0) / 360.0
}

/// Distance between two phases on the unit circle, in `[0, 0.5]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(1.0 - d)
}

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in order, starting at new moon.
pub const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::New,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::Full,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    /// Nearest named phase to a `[0, 1)` phase value.
    pub fn from_phase(phase: f64) -> Self {
        let octant = (modulo(phase, 1.0) * 8.0).round() as usize % 8;
        ALL_PHASES[octant]
    }

    /// 0-based index in [`ALL_PHASES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}
