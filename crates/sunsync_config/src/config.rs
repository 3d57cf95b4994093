//! The `sunsync.toml` settings file.
//!
//! ```toml
//! location = "auto"
//! synchronization_interval_seconds = 5
//! debug_mode = false
//! ```
//!
//! Missing keys take their defaults. A key that is present but invalid is
//! reported with `tracing::error!` and also replaced by its default, so a
//! single bad value never prevents startup.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::{Table, Value};
use tracing::{error, warn};

use crate::error::{ConfigError, Result};
use crate::location::{AUTO, LocationSetting};

pub const SYNC_INTERVAL_DEFAULT_SECONDS: u64 = 5;
pub const SYNC_INTERVAL_MIN_SECONDS: u64 = 1;
pub const SYNC_INTERVAL_MAX_SECONDS: u64 = 1800;
pub const DEBUG_MODE_DEFAULT: bool = false;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncConfig {
    /// `auto`, decimal or sexagesimal degrees.
    pub location: String,
    pub synchronization_interval_seconds: u64,
    pub debug_mode: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            location: AUTO.to_string(),
            synchronization_interval_seconds: SYNC_INTERVAL_DEFAULT_SECONDS,
            debug_mode: DEBUG_MODE_DEFAULT,
        }
    }
}

impl SyncConfig {
    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Read settings from TOML text, replacing invalid values with defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: Table = text.parse()?;
        let mut config = Self::default();

        for key in table.keys() {
            if !matches!(
                key.as_str(),
                "location" | "synchronization_interval_seconds" | "debug_mode"
            ) {
                warn!(key = key.as_str(), "ignoring unknown configuration key");
            }
        }

        if let Some(value) = table.get("location") {
            match value.as_str() {
                Some(text) => {
                    if let Err(e) = config.set_location(text) {
                        error!("\"location\" is invalid ({e}), using \"{AUTO}\"");
                    }
                }
                None => error!("\"location\" must be a string, using \"{AUTO}\""),
            }
        }

        if let Some(value) = table.get("synchronization_interval_seconds") {
            let applied = match value {
                Value::Integer(n) => config.set_synchronization_interval_seconds_signed(*n),
                _ => Err(interval_error(-1)),
            };
            if applied.is_err() {
                error!(
                    "\"synchronization_interval_seconds\" is invalid, using {SYNC_INTERVAL_DEFAULT_SECONDS}; \
                     use an integer between {SYNC_INTERVAL_MIN_SECONDS} and {SYNC_INTERVAL_MAX_SECONDS}"
                );
            }
        }

        if let Some(value) = table.get("debug_mode") {
            match value.as_bool() {
                Some(b) => config.debug_mode = b,
                None => error!("\"debug_mode\" must be true or false, using {DEBUG_MODE_DEFAULT}"),
            }
        }
        if config.debug_mode {
            warn!("debug mode is enabled");
        }

        Ok(config)
    }

    /// Write settings back as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the location if `text` parses.
    pub fn set_location(&mut self, text: &str) -> Result<LocationSetting> {
        let setting = LocationSetting::parse(text)?;
        self.location = text.trim().to_string();
        Ok(setting)
    }

    /// The parsed form of the stored location.
    pub fn location_setting(&self) -> Result<LocationSetting> {
        LocationSetting::parse(&self.location)
    }

    pub fn set_synchronization_interval_seconds(&mut self, seconds: u64) -> Result<()> {
        if (SYNC_INTERVAL_MIN_SECONDS..=SYNC_INTERVAL_MAX_SECONDS).contains(&seconds) {
            self.synchronization_interval_seconds = seconds;
            Ok(())
        } else {
            Err(interval_error(i64::try_from(seconds).unwrap_or(i64::MAX)))
        }
    }

    fn set_synchronization_interval_seconds_signed(&mut self, seconds: i64) -> Result<()> {
        let unsigned = u64::try_from(seconds).map_err(|_| interval_error(seconds))?;
        self.set_synchronization_interval_seconds(unsigned)
    }
}

fn interval_error(value: i64) -> ConfigError {
    ConfigError::IntervalOutOfRange {
        value,
        min: SYNC_INTERVAL_MIN_SECONDS,
        max: SYNC_INTERVAL_MAX_SECONDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SyncConfig::default();
        assert_eq!(c.location, "auto");
        assert_eq!(c.synchronization_interval_seconds, 5);
        assert!(!c.debug_mode);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(SyncConfig::from_toml_str("").unwrap(), SyncConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let c = SyncConfig::from_toml_str(
            "location = \"51.5074, -0.1278\"\nsynchronization_interval_seconds = 60\ndebug_mode = true\n",
        )
        .unwrap();
        assert_eq!(c.location, "51.5074, -0.1278");
        assert_eq!(c.synchronization_interval_seconds, 60);
        assert!(c.debug_mode);
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = SyncConfig::from_toml_str(
            "location = \"somewhere\"\nsynchronization_interval_seconds = 0\ndebug_mode = \"yes\"\n",
        )
        .unwrap();
        assert_eq!(c, SyncConfig::default());
    }

    #[test]
    fn interval_bounds() {
        let mut c = SyncConfig::default();
        assert!(c.set_synchronization_interval_seconds(1).is_ok());
        assert!(c.set_synchronization_interval_seconds(1800).is_ok());
        assert_eq!(c.synchronization_interval_seconds, 1800);
        assert!(matches!(
            c.set_synchronization_interval_seconds(1801),
            Err(ConfigError::IntervalOutOfRange { value: 1801, .. })
        ));
        assert!(c.set_synchronization_interval_seconds(0).is_err());
        assert_eq!(c.synchronization_interval_seconds, 1800);
    }

    #[test]
    fn negative_and_non_integer_intervals_fall_back() {
        for text in [
            "synchronization_interval_seconds = -5",
            "synchronization_interval_seconds = 2.5",
            "synchronization_interval_seconds = \"10\"",
        ] {
            let c = SyncConfig::from_toml_str(text).unwrap();
            assert_eq!(c.synchronization_interval_seconds, 5, "{text}");
        }
    }

    #[test]
    fn serialized_form_reads_back() {
        let mut c = SyncConfig::default();
        c.set_location("33° S 151° E").unwrap();
        c.debug_mode = true;
        let text = toml::to_string_pretty(&c).unwrap();
        assert!(text.contains("synchronization_interval_seconds = 5"), "{text}");
        assert_eq!(SyncConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn syntax_error_is_reported() {
        assert!(matches!(
            SyncConfig::from_toml_str("location = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn set_location_keeps_previous_on_error() {
        let mut c = SyncConfig::default();
        c.set_location("10 20").unwrap();
        assert!(c.set_location("1.11.1").is_err());
        assert_eq!(c.location, "10 20");
    }
}
