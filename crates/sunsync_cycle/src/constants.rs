//! Scale and offset of the day and night segments of a game cycle.

/// One segment of the cycle: `value = start + length · fraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSegment {
    /// Game-time span of the segment.
    pub length: f64,
    /// Game time at which the segment begins.
    pub start: f64,
}

impl CycleSegment {
    pub const fn new(length: f64, start: f64) -> Self {
        Self { length, start }
    }

    /// Game time at `fraction` of the way through this segment.
    pub fn at(&self, fraction: f64) -> f64 {
        self.length * fraction + self.start
    }

    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}

/// Day and night segments plus the length of the whole cycle.
///
/// The default is the Minecraft clock in ticks: day 14000 ticks starting
/// at 23000 (sunrise, one cycle ahead of -1000), night 10000 ticks
/// starting at 37000 (sunset), 24000 ticks per cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleConstants {
    pub day: CycleSegment,
    pub night: CycleSegment,
    pub cycle_length: f64,
}

impl Default for CycleConstants {
    fn default() -> Self {
        Self {
            day: CycleSegment::new(14_000.0, 23_000.0),
            night: CycleSegment::new(10_000.0, 37_000.0),
            cycle_length: 24_000.0,
        }
    }
}

impl CycleConstants {
    /// Position of `value` within one cycle, in `[0, cycle_length)`.
    pub fn time_of_day(&self, value: f64) -> f64 {
        value.rem_euclid(self.cycle_length)
    }
}
