//! Sunrise/sunset from the Sun's equatorial position.
//!
//! The Sun crosses the horizon when its hour angle H satisfies
//!
//! `cos H = −(sin h₀ + sin φ sin δ) / (cos φ cos δ)`
//!
//! with `sin h₀` the horizon shift for refraction and the solar disc.
//! Rise and set local sidereal times are `α ∓ H`, which go through
//! Greenwich sidereal time to UT on the requested date.
//!
//! `cos H > 1` means the Sun stays below the horizon all day, `cos H < −1`
//! that it stays above. At the poles (or a Sun at a celestial pole) the
//! denominator vanishes; the day is then classified by the sign of the
//! numerator alone.

use chrono::{Datelike, NaiveDate};
use sunsync_frames::EquatorialCoordinate;
use sunsync_time::{gst_to_ut, lst_to_gst, modulo};

use crate::error::SolarError;
use crate::location::GeographicCoordinate;
use crate::riseset_types::{RiseAndSet, RiseSetResult};
use crate::solar::sun_position_at_day;

/// Sine of the 0.5667° vertical shift of the horizon.
pub const HORIZON_SHIFT_SINE: f64 = 0.009_890_619_606_703_505;

/// Below this `|cos φ cos δ|` the hour-angle quotient is not meaningful.
const DEGENERATE_DENOMINATOR: f64 = 1.0e-12;

/// Half the time above the horizon, or why there is none.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SemiDiurnalArc {
    Hours(f64),
    NeverRises,
    NeverSets,
}

fn semi_diurnal_arc(latitude_rad: f64, declination_rad: f64) -> SemiDiurnalArc {
    let altitude_term = HORIZON_SHIFT_SINE + latitude_rad.sin() * declination_rad.sin();
    let denominator = latitude_rad.cos() * declination_rad.cos();
    let cos_h = -altitude_term / denominator;

    if denominator.abs() < DEGENERATE_DENOMINATOR || !cos_h.is_finite() {
        return if altitude_term >= 0.0 {
            SemiDiurnalArc::NeverSets
        } else {
            SemiDiurnalArc::NeverRises
        };
    }

    if cos_h > 1.0 {
        SemiDiurnalArc::NeverRises
    } else if cos_h < -1.0 {
        SemiDiurnalArc::NeverSets
    } else {
        SemiDiurnalArc::Hours(cos_h.acos().to_degrees() / 15.0)
    }
}

/// Rise and set of a body at `eq` for an observer at `location` on `date`.
///
/// Both returned instants fall on `date` (UTC).
pub fn rise_and_set(
    eq: &EquatorialCoordinate,
    location: &GeographicCoordinate,
    date: NaiveDate,
) -> Result<RiseSetResult, SolarError> {
    let h = match semi_diurnal_arc(location.latitude_rad(), eq.declination_deg.to_radians()) {
        SemiDiurnalArc::Hours(h) => h,
        SemiDiurnalArc::NeverRises => return Ok(RiseSetResult::NeverRises),
        SemiDiurnalArc::NeverSets => return Ok(RiseSetResult::NeverSets),
    };

    let alpha = eq.right_ascension_hours;
    let rise_lst = modulo(alpha - h, 24.0);
    let set_lst = modulo(alpha + h, 24.0);

    let rise_gst = lst_to_gst(rise_lst, location.longitude_deg());
    let set_gst = lst_to_gst(set_lst, location.longitude_deg());

    let (day, month, year) = (date.day(), date.month(), date.year());
    let rise_ut = gst_to_ut(rise_gst, day, month, year)?;
    let set_ut = gst_to_ut(set_gst, day, month, year)?;

    Ok(RiseSetResult::Event(RiseAndSet::new(
        date.and_time(rise_ut),
        date.and_time(set_ut),
    )))
}

/// Approximate UTC sunrise and sunset at sea level.
///
/// The Sun's position is taken at 12:00 UT of `date`. Expect errors of a
/// few minutes against published tables.
pub fn sunrise_and_sunset_times(
    location: &GeographicCoordinate,
    date: NaiveDate,
) -> Result<RiseSetResult, SolarError> {
    let sun = sun_position_at_day(f64::from(date.day()) + 0.5, date.month(), date.year());
    rise_and_set(&sun, location, date)
}
