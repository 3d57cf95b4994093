//! Lunar phase → day of an 8-phase game moon.
//!
//! The game moon starts its cycle at full moon:
//! 0 = full, 2 = last quarter, 4 = new, 6 = first quarter.

use sunsync_time::modulo;

pub const MOON_CYCLE_DAYS: u8 = 8;

/// Map a phase in `[0, 1)` (0 = new, 0.5 = full) onto the game moon day.
pub fn moon_phase_to_cycle_day(phase: f64) -> u8 {
    let days = f64::from(MOON_CYCLE_DAYS);
    let shifted = modulo(phase - 0.5, 1.0);
    ((shifted * days).round() as u8) % MOON_CYCLE_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_phases() {
        assert_eq!(moon_phase_to_cycle_day(0.5), 0);
        assert_eq!(moon_phase_to_cycle_day(0.75), 2);
        assert_eq!(moon_phase_to_cycle_day(0.0), 4);
        assert_eq!(moon_phase_to_cycle_day(0.25), 6);
    }

    #[test]
    fn wraps_near_full() {
        assert_eq!(moon_phase_to_cycle_day(0.49), 0);
        assert_eq!(moon_phase_to_cycle_day(0.999), 4);
        // just before full rounds up to 8, which is day 0
        assert_eq!(moon_phase_to_cycle_day(0.46), 0);
    }

    #[test]
    fn every_day_is_reachable() {
        let mut seen = [false; 8];
        for i in 0..800 {
            seen[usize::from(moon_phase_to_cycle_day(f64::from(i) / 800.0))] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
