//! Calendar arithmetic: floor modulo and Gregorian → Julian Date.
//!
//! The Julian Date conversion is the classical Meeus algorithm with
//! truncating integer terms. No Julian/Gregorian calendar switch is applied,
//! so only dates on the modern Gregorian calendar convert correctly.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Offset between the proleptic Gregorian day count and the Julian Date.
const JD_OFFSET: f64 = 1_720_994.5;

/// Floor-division modulo: the sign of the result follows the divisor.
///
/// `modulo(x, m) = x − m·floor(x/m)`, so for `m > 0` the result always lies
/// in `[0, m)`, including for negative `x`. This differs from Rust's `%`,
/// which truncates toward zero.
pub fn modulo(dividend: f64, divisor: f64) -> f64 {
    let mut r = dividend - divisor * (dividend / divisor).floor();
    // Rounding in the quotient can leave `r` a hair outside [0, divisor).
    if divisor > 0.0 {
        if r >= divisor {
            r -= divisor;
        }
        if r < 0.0 {
            r += divisor;
        }
        if r >= divisor {
            r = 0.0;
        }
    }
    r
}

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fractional part (`19.75` is 18:00 on the 19th).
/// January and February are treated as months 13 and 14 of the previous
/// year. The century, year and month terms are truncated toward zero.
pub fn to_julian_date(day: f64, month: u32, year: i32) -> f64 {
    let (y, m) = if matches!(month, 1 | 2) {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = (f64::from(y) / 100.0).trunc();
    let b = 2.0 - a + (a / 4.0).trunc();
    let c = if y < 0 {
        (365.25 * f64::from(y) - 0.75).trunc()
    } else {
        (365.25 * f64::from(y)).trunc()
    };
    let d = (30.6001 * f64::from(m + 1)).trunc();

    b + c + d + day + JD_OFFSET
}

/// Julian Date at 0h UT of a calendar date.
pub fn date_to_julian(date: NaiveDate) -> f64 {
    to_julian_date(f64::from(date.day()), date.month(), date.year())
}

/// Day of month with the time of day folded in as a fraction.
///
/// `day + hour/24 + minute/1440 + second/86400`; sub-second precision is
/// dropped.
pub fn fractional_day(datetime: NaiveDateTime) -> f64 {
    let hour = f64::from(datetime.hour()) / 24.0;
    let minute = f64::from(datetime.minute()) / 1440.0;
    let second = f64::from(datetime.second()) / 86_400.0;
    f64::from(datetime.day()) + hour + minute + second
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Days elapsed since the epoch 2010 January 0.0 (= 2009-Dec-31 0h).
pub fn days_since_epoch_2010(day: f64, month: u32, year: i32) -> f64 {
    to_julian_date(day, month, year) - to_julian_date(0.0, 1, 2010)
}

/// The calendar day before `date`.
pub fn previous_day(date: NaiveDate) -> Result<NaiveDate, TimeError> {
    date.pred_opt().ok_or(TimeError::DateOutOfRange(date))
}

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate, TimeError> {
    date.succ_opt().ok_or(TimeError::DateOutOfRange(date))
}
