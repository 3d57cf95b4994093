//! Settings, location grammar and the bundled region table.
//!
//! A [`SyncConfig`] is read from `sunsync.toml`. Its `location` string is
//! parsed into a [`LocationSetting`], which resolves to a coordinate either
//! directly or through the locale country and the [`RegionTable`].

pub mod config;
pub mod error;
pub mod location;
pub mod regions;

pub use config::{
    DEBUG_MODE_DEFAULT, SYNC_INTERVAL_DEFAULT_SECONDS, SYNC_INTERVAL_MAX_SECONDS,
    SYNC_INTERVAL_MIN_SECONDS, SyncConfig,
};
pub use error::{ConfigError, Result};
pub use location::{AUTO, LocationSetting, country_from_locale, parse_location, system_country};
pub use regions::{BUNDLED_REGIONS, RegionTable};
