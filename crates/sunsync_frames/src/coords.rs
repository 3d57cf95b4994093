//! Celestial coordinate value types.
//!
//! Neither type validates its fields. They are produced by the solar
//! position code and consumed by the rise/set solver.

/// Position relative to the plane of Earth's orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinate {
    /// Ecliptic latitude (β) in degrees.
    pub latitude_deg: f64,
    /// Ecliptic longitude (λ) in degrees.
    pub longitude_deg: f64,
}

impl EclipticCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// Position relative to Earth's equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinate {
    /// Right ascension (α) in hours.
    pub right_ascension_hours: f64,
    /// Declination (δ) in degrees.
    pub declination_deg: f64,
}

impl EquatorialCoordinate {
    pub fn new(right_ascension_hours: f64, declination_deg: f64) -> Self {
        Self {
            right_ascension_hours,
            declination_deg,
        }
    }

    /// Right ascension in degrees.
    pub fn right_ascension_deg(&self) -> f64 {
        self.right_ascension_hours * 15.0
    }
}
