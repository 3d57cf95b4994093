use std::path::PathBuf;

use sunsync_base::SolarError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML syntax error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unrecognized location \"{0}\"; use \"auto\", decimal or sexagesimal degrees")]
    InvalidLocation(String),

    #[error("coordinate out of range: {0}")]
    Coordinate(#[from] SolarError),

    #[error("synchronization interval {value} s is outside {min}..={max}")]
    IntervalOutOfRange { value: i64, min: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
