//! Low-precision solar position.
//!
//! Orbital elements are fixed at the epoch 2010 January 0.0:
//! ecliptic longitude at epoch ε_g = 279.557208°, longitude of perigee
//! ω_g = 283.112438°, eccentricity e = 0.016705. Good to a few arcminutes
//! for dates within a few decades of the epoch.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use sunsync_frames::{EclipticCoordinate, EquatorialCoordinate, ecliptic_to_equatorial};
use sunsync_time::{days_since_epoch_2010, modulo};

/// Ecliptic longitude of the Sun at the epoch, degrees.
const LONGITUDE_AT_EPOCH_DEG: f64 = 279.557208;

/// Ecliptic longitude of perigee at the epoch, degrees.
const LONGITUDE_OF_PERIGEE_DEG: f64 = 283.112438;

/// Eccentricity of Earth's orbit.
const ORBIT_ECCENTRICITY: f64 = 0.016705;

/// Tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.242191;

/// Mean longitude swept since the epoch, `N` in degrees.
fn mean_motion_deg(day: f64, month: u32, year: i32) -> f64 {
    let d = days_since_epoch_2010(day, month, year);
    modulo((360.0 / TROPICAL_YEAR_DAYS) * d, 360.0)
}

/// Sun's mean anomaly in degrees `[0, 360)`. `day` may be fractional.
pub fn sun_mean_anomaly(day: f64, month: u32, year: i32) -> f64 {
    let n = mean_motion_deg(day, month, year);
    modulo(n + LONGITUDE_AT_EPOCH_DEG - LONGITUDE_OF_PERIGEE_DEG, 360.0)
}

/// Sun's geocentric ecliptic longitude λ in degrees `[0, 360)`.
///
/// `λ = N + (360/π)·e·sin M + ε_g`, with the equation of centre truncated
/// to its first term.
pub fn sun_ecliptic_longitude(day: f64, month: u32, year: i32) -> f64 {
    let n = mean_motion_deg(day, month, year);
    let m = modulo(n + LONGITUDE_AT_EPOCH_DEG - LONGITUDE_OF_PERIGEE_DEG, 360.0);
    let center = (360.0 / PI) * ORBIT_ECCENTRICITY * m.to_radians().sin();
    modulo(n + center + LONGITUDE_AT_EPOCH_DEG, 360.0)
}

/// Sun's equatorial position at a (possibly fractional) day.
pub fn sun_position_at_day(day: f64, month: u32, year: i32) -> EquatorialCoordinate {
    let ecl = EclipticCoordinate::new(0.0, sun_ecliptic_longitude(day, month, year));
    ecliptic_to_equatorial(&ecl, day, month, year)
}

/// Sun's declination at 12:00 UT of `date`, in degrees.
pub fn sun_declination_at_noon(date: NaiveDate) -> f64 {
    sun_position_at_day(f64::from(date.day()) + 0.5, date.month(), date.year()).declination_deg
}
