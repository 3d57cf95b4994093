//! Ecliptic → equatorial transform.
//!
//! δ = asin(sin β cos ε + cos β sin ε sin λ)
//! α = atan(y / x),  y = sin λ cos ε − tan β sin ε,  x = cos λ
//!
//! `atan` only covers (−90°, 90°), so α is moved into the right quadrant
//! from the signs of x and y. The obliquity ε is evaluated at the given date.

use sunsync_time::{julian_centuries_since_j2000, to_julian_date};

use crate::coords::{EclipticCoordinate, EquatorialCoordinate};
use crate::obliquity::mean_obliquity_deg;

/// Convert an ecliptic position to equatorial coordinates at a date.
///
/// `day` may be fractional. The right ascension is returned in hours.
pub fn ecliptic_to_equatorial(
    ecl: &EclipticCoordinate,
    day: f64,
    month: u32,
    year: i32,
) -> EquatorialCoordinate {
    let beta = ecl.latitude_deg.to_radians();
    let lambda = ecl.longitude_deg.to_radians();

    let t = julian_centuries_since_j2000(to_julian_date(day, month, year));
    let eps = mean_obliquity_deg(t).to_radians();

    let delta = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();

    let y = lambda.sin() * eps.cos() - beta.tan() * eps.sin();
    let x = lambda.cos();
    let mut alpha_deg = (y / x).atan().to_degrees();
    if x < 0.0 {
        // second and third quadrants
        alpha_deg += 180.0;
    } else if x > 0.0 && y < 0.0 {
        // fourth quadrant
        alpha_deg += 360.0;
    }

    EquatorialCoordinate::new(alpha_deg / 15.0, delta.to_degrees())
}
