//! Rush-hour policy mapping a local hour-of-day to an ETA multiplier.
//!
//! Lunch and dinner windows are half-open: the start hour is inside the
//! window, the end hour is outside.

/// First hour of the lunch rush window (inclusive)
pub const LUNCH_RUSH_START_HOUR: u32 = 12;
/// End of the lunch rush window (exclusive)
pub const LUNCH_RUSH_END_HOUR: u32 = 14;
/// First hour of the dinner rush window (inclusive)
pub const DINNER_RUSH_START_HOUR: u32 = 19;
/// End of the dinner rush window (exclusive)
pub const DINNER_RUSH_END_HOUR: u32 = 21;
/// Factor applied to the baseline ETA during a rush window
pub const RUSH_HOUR_MULTIPLIER: f64 = 1.5;

/// Multiplier applied to the baseline ETA for the given local hour [0, 23].
pub fn multiplier(hour: u32) -> f64 {
    if (LUNCH_RUSH_START_HOUR..LUNCH_RUSH_END_HOUR).contains(&hour)
        || (DINNER_RUSH_START_HOUR..DINNER_RUSH_END_HOUR).contains(&hour)
    {
        RUSH_HOUR_MULTIPLIER
    } else {
        1.0
    }
}

/// Whether the given local hour falls inside a rush window.
pub fn is_rush_hour(hour: u32) -> bool {
    multiplier(hour) > 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_window_boundaries() {
        assert_eq!(multiplier(11), 1.0);
        assert_eq!(multiplier(12), 1.5);
        assert_eq!(multiplier(13), 1.5);
        assert_eq!(multiplier(14), 1.0);
        assert_eq!(multiplier(18), 1.0);
        assert_eq!(multiplier(19), 1.5);
        assert_eq!(multiplier(20), 1.5);
        assert_eq!(multiplier(21), 1.0);
    }

    #[test]
    fn test_is_rush_hour_matches_multiplier() {
        for hour in 0..24 {
            assert_eq!(is_rush_hour(hour), multiplier(hour) > 1.0);
        }
    }

    #[test]
    fn test_off_peak_hours_are_unity() {
        for hour in [0, 3, 6, 9, 11, 15, 17, 22, 23] {
            assert_eq!(multiplier(hour), 1.0);
        }
    }
}
