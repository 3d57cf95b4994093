//! Sun and Moon calculations for SunSync.
//!
//! This crate provides:
//! - A validated geographic observer location
//! - Low-precision solar position (epoch 2010.0 elements)
//! - Sunrise/sunset in UTC, with polar day and polar night as results
//! - Lunar phase estimation
//!
//! Accuracy is a few minutes for rise/set and a few hours for the
//! phase of the Moon, which is enough to drive a day/night cycle.

pub mod error;
pub mod location;
pub mod lunar;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

pub use error::SolarError;
pub use location::GeographicCoordinate;
pub use lunar::{ALL_PHASES, LunarPhase, circular_distance, moon_phase};
pub use riseset::{HORIZON_SHIFT_SINE, rise_and_set, sunrise_and_sunset_times};
pub use riseset_types::{RiseAndSet, RiseSetResult};
pub use solar::{
    sun_declination_at_noon, sun_ecliptic_longitude, sun_mean_anomaly, sun_position_at_day,
};
