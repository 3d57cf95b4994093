//! Keeps a game clock in step with the real sun.
//!
//! [`Synchronizer`] reads a [`Clock`], caches the rise/set events of the
//! current UTC day, and turns "now" into game ticks. Days without a sunrise
//! or sunset pin the game clock to midnight or midday.

pub mod cache;
pub mod clock;
pub mod command;
pub mod error;
pub mod moon;
pub mod sync;

pub use cache::EventCache;
pub use clock::{Clock, FixedClock, OffsetClock, SystemClock, parse_clock_time};
pub use command::command_changes_game_time;
pub use error::{ClockError, Result, SyncError};
pub use moon::{MOON_CYCLE_DAYS, moon_phase_to_cycle_day};
pub use sync::{SyncOutcome, Synchronizer, fallback_ticks};

/// Game ticks per real second.
pub const TICKS_PER_SECOND: u64 = 20;
pub const MIDDAY_TICKS: u64 = 30_000;
pub const MIDNIGHT_TICKS: u64 = 42_000;
