//! 12-hour clock normalization.
//!
//! Converts clock input (hour 1-12, minute 0-59, AM/PM) into minutes since
//! midnight in the range 0..1440.

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, Meridiem};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes from midnight to noon.
const NOON: u32 = 12 * 60;

/// Converts a 12-hour clock time to minutes since midnight.
///
/// 12 AM is midnight (0) and 12 PM is noon (720). Any other PM hour adds
/// 720 minutes to the 1-11 hour value.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] when the hour is outside 1-12, the
/// minute is outside 0-59, or the meridiem is not "AM"/"PM" in any case.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::normalize_time;
///
/// assert_eq!(normalize_time(12, 0, "AM").unwrap(), 0);
/// assert_eq!(normalize_time(12, 0, "pm").unwrap(), 720);
/// assert_eq!(normalize_time(6, 30, "PM").unwrap(), 1110);
/// assert!(normalize_time(13, 0, "PM").is_err());
/// ```
pub fn normalize_time(hour: u32, minute: u32, meridiem: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTime {
        hour,
        minute,
        meridiem: meridiem.to_string(),
    };

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let meridiem: Meridiem = meridiem.parse().map_err(|_| invalid())?;
    let hour_minutes = (hour % 12) * 60;

    Ok(match meridiem {
        Meridiem::Am => hour_minutes + minute,
        Meridiem::Pm => NOON + hour_minutes + minute,
    })
}

/// Normalizes a [`ClockTime`]; see [`normalize_time`].
pub fn normalize_clock_time(time: &ClockTime) -> EngineResult<u32> {
    normalize_time(time.hour, time.minute, &time.meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(normalize_time(12, 0, "AM").unwrap(), 0);
        assert_eq!(normalize_time(12, 0, "PM").unwrap(), 720);
        assert_eq!(normalize_time(12, 59, "AM").unwrap(), 59);
        assert_eq!(normalize_time(12, 59, "PM").unwrap(), 779);
    }

    #[test]
    fn test_morning_and_evening_hours() {
        assert_eq!(normalize_time(1, 0, "AM").unwrap(), 60);
        assert_eq!(normalize_time(9, 0, "AM").unwrap(), 540);
        assert_eq!(normalize_time(5, 0, "PM").unwrap(), 1020);
        assert_eq!(normalize_time(11, 59, "PM").unwrap(), 1439);
    }

    #[test]
    fn test_meridiem_case_insensitive() {
        assert_eq!(normalize_time(2, 15, "pm").unwrap(), 855);
        assert_eq!(normalize_time(2, 15, "Am").unwrap(), 135);
    }

    #[test]
    fn test_hour_out_of_range() {
        assert!(matches!(
            normalize_time(0, 0, "AM"),
            Err(EngineError::InvalidTime { hour: 0, .. })
        ));
        assert!(normalize_time(13, 0, "PM").is_err());
    }

    #[test]
    fn test_minute_out_of_range() {
        assert!(matches!(
            normalize_time(9, 60, "AM"),
            Err(EngineError::InvalidTime { minute: 60, .. })
        ));
    }

    #[test]
    fn test_unknown_meridiem() {
        match normalize_time(9, 0, "XM") {
            Err(EngineError::InvalidTime { meridiem, .. }) => assert_eq!(meridiem, "XM"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
        assert!(normalize_time(9, 0, "").is_err());
    }

    #[test]
    fn test_normalize_clock_time() {
        assert_eq!(normalize_clock_time(&ClockTime::pm(6, 30)).unwrap(), 1110);
        assert!(normalize_clock_time(&ClockTime::new(6, 30, "noon")).is_err());
    }

    #[test]
    fn test_every_valid_input_maps_to_a_distinct_minute() {
        let mut seen = HashSet::new();
        for meridiem in ["AM", "PM"] {
            for hour in 1..=12 {
                for minute in 0..60 {
                    let minutes = normalize_time(hour, minute, meridiem).unwrap();
                    assert!(minutes < MINUTES_PER_DAY);
                    assert!(seen.insert(minutes), "duplicate minute {}", minutes);
                }
            }
        }
        assert_eq!(seen.len(), MINUTES_PER_DAY as usize);
    }

    proptest! {
        #[test]
        fn prop_round_trips_through_clock_time(minutes in 0u32..MINUTES_PER_DAY) {
            let time = ClockTime::from_minutes(minutes);
            prop_assert_eq!(normalize_clock_time(&time).unwrap(), minutes);
        }

        #[test]
        fn prop_out_of_range_hours_fail(hour in 13u32..1000, minute in 0u32..60) {
            prop_assert!(normalize_time(hour, minute, "AM").is_err());
        }
    }
}
