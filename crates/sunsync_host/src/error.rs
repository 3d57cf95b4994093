use sunsync_base::SolarError;
use sunsync_config::ConfigError;
use sunsync_cycle::CycleError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("invalid time \"{0}\"; use HH:MM or HH:MM:SS (UTC, 24-hour)")]
    InvalidFormat(String),

    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },
}

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("solar calculation failed: {0}")]
    Solar(#[from] SolarError),

    #[error("game time interpolation failed: {0}")]
    Cycle(#[from] CycleError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
