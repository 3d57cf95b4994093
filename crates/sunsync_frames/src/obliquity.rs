//! Mean obliquity of the ecliptic.
//!
//! ε = 23.439292° − (46.815·T − 0.0006·T² + 0.00181·T³) / 3600
//!
//! where T is Julian centuries since J2000.0. Good to well under an
//! arcsecond for a few centuries either side of 2000.

/// Mean obliquity at J2000.0 in degrees (23° 26′ 21.45″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439292;

/// Mean obliquity of the ecliptic in degrees for `t` Julian centuries
/// since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let correction = (46.815 * t - 0.0006 * t * t + 0.00181 * t * t * t) / 3600.0;
    OBLIQUITY_J2000_DEG - correction
}
