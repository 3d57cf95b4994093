//! Sidereal time conversions (LST → GST → UT).
//!
//! Low-precision algorithm: Greenwich sidereal time at 0h UT from a
//! quadratic in Julian centuries, then the sidereal interval since 0h is
//! scaled to a mean solar interval. Accurate to about a second for dates
//! near the present, which is far below the error of the rise/set model.

use chrono::NaiveTime;

use crate::calendar::{julian_centuries_since_j2000, modulo, to_julian_date};
use crate::error::TimeError;

/// Length of a sidereal hour in mean solar hours.
pub const SIDEREAL_TO_SOLAR: f64 = 0.997_269_566_3;

/// Greenwich sidereal time at 0h UT of the given date, in hours `[0, 24)`.
///
/// `T0 = 6.697374558 + 2400.051336·T + 0.000025862·T²` (mod 24), with `T`
/// in Julian centuries since J2000.0.
pub fn gst_at_0h_ut_hours(day: u32, month: u32, year: i32) -> f64 {
    let t = julian_centuries_since_j2000(to_julian_date(f64::from(day), month, year));
    modulo(6.697374558 + 2400.051336 * t + 0.000025862 * t * t, 24.0)
}

/// Local sidereal time to Greenwich sidereal time.
///
/// `longitude_deg` is east positive.
pub fn lst_to_gst(lst_hours: f64, longitude_deg: f64) -> f64 {
    modulo(lst_hours - longitude_deg / 15.0, 24.0)
}

/// Convert a Greenwich sidereal time on a date to a UT time of day.
///
/// The result is truncated to whole minutes and rounded to whole seconds.
/// A rounding artifact of 60 seconds is clamped to 59.
pub fn gst_to_ut(gst_hours: f64, day: u32, month: u32, year: i32) -> Result<NaiveTime, TimeError> {
    let t0 = gst_at_0h_ut_hours(day, month, year);
    let ut_hours = modulo(gst_hours - t0, 24.0) * SIDEREAL_TO_SOLAR;
    let (hour, minute, second) = split_hours(ut_hours);
    NaiveTime::from_hms_opt(hour, minute, second).ok_or(TimeError::InvalidTimeOfDay {
        hour,
        minute,
        second,
    })
}

/// Split decimal hours into `(hour, minute, second)`.
///
/// Hours and minutes truncate; seconds round to nearest and never exceed 59.
pub fn split_hours(hours: f64) -> (u32, u32, u32) {
    let minutes = hours.fract() * 60.0;
    let seconds = minutes.fract() * 60.0;
    let second = (seconds.round() as u32).min(59);
    (hours.trunc() as u32, minutes.trunc() as u32, second)
}
