//! Calendar and time-scale arithmetic for SunSync.
//!
//! This crate provides:
//! - Floor-division `modulo` used for every angle and hour normalization
//! - Gregorian calendar ↔ Julian Date conversion (truncating Meeus algorithm)
//! - Local/Greenwich sidereal time and GST → UT conversion
//!
//! All times are UT, treated as UTC. Leap seconds are ignored.

pub mod calendar;
pub mod error;
pub mod sidereal;

pub use calendar::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, date_to_julian, days_since_epoch_2010, fractional_day,
    julian_centuries_since_j2000, modulo, next_day, previous_day, to_julian_date,
};
pub use error::TimeError;
pub use sidereal::{SIDEREAL_TO_SOLAR, gst_at_0h_ut_hours, gst_to_ut, lst_to_gst, split_hours};
