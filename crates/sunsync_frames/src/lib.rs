//! Coordinate frames for low-precision solar work.
//!
//! Provides the ecliptic and equatorial coordinate types, the mean
//! obliquity of the ecliptic, and the ecliptic → equatorial transform.

pub mod coords;
pub mod obliquity;
pub mod transform;

pub use coords::{EclipticCoordinate, EquatorialCoordinate};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use transform::ecliptic_to_equatorial;
