//! Geographic observer location.

use std::fmt::{Display, Formatter};

use crate::error::SolarError;

/// Position on Earth's surface, validated at construction.
///
/// Latitude is north positive in `[-90, 90]`, longitude east positive in
/// `[-180, 180]`, both in degrees. The default is `(0°, 0°)`, used when no
/// better location is known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeographicCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeographicCoordinate {
    /// Create a coordinate from decimal degrees.
    pub fn from_decimal_degrees(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidCoordinate(
                "latitude must be in [-90, 90] degrees",
            ));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidCoordinate(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Create a coordinate from degrees, arc-minutes and arc-seconds per axis.
    ///
    /// Each axis is `deg + min/60 + sec/3600`. For south or west positions
    /// the caller negates all three components of that axis.
    pub fn from_sexagesimal(
        lat_deg: f64,
        lat_arcmin: f64,
        lat_arcsec: f64,
        lon_deg: f64,
        lon_arcmin: f64,
        lon_arcsec: f64,
    ) -> Result<Self, SolarError> {
        Self::from_decimal_degrees(
            sexagesimal_to_decimal(lat_deg, lat_arcmin, lat_arcsec),
            sexagesimal_to_decimal(lon_deg, lon_arcmin, lon_arcsec),
        )
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

fn sexagesimal_to_decimal(deg: f64, arcmin: f64, arcsec: f64) -> f64 {
    deg + arcmin / 60.0 + arcsec / 3600.0
}

/// At least one and at most six fractional digits: `40.4168`, `0.0`.
fn format_degrees(value: f64) -> String {
    let mut s = format!("{value:.6}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    if s == "-0.0" { "0.0".to_string() } else { s }
}

impl Display for GeographicCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}",
            format_degrees(self.latitude_deg),
            format_degrees(self.longitude_deg)
        )
    }
}
