//! Real-world day/night mapped onto a cyclic game clock.
//!
//! This crate provides:
//! - Day/night classification of an instant against three days of events
//! - Linear interpolation into configurable day and night segments
//! - Detection of polar days and nights that cannot be interpolated
//!
//! What to do on a degenerate day (e.g. pin the clock to midnight) is left
//! to the caller.

pub mod constants;
pub mod daily;
pub mod error;
pub mod interpolate;

pub use constants::{CycleConstants, CycleSegment};
pub use daily::{DailyEvents, DailyEventsResult, DegenerateDay, GameTime, daily_events, game_time_at};
pub use error::CycleError;
pub use interpolate::{CycleTime, DayPeriod, interpolate_game_time};
