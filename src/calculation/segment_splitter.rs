//! Normal/loading minute splitting.
//!
//! A shift is cut at midnight into at most two day-bounded segments. Each
//! segment is split against that day's premium threshold, so an overnight
//! shift gets the threshold honored before and after midnight.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::day_detection::DayType;
use super::time_normalizer::MINUTES_PER_DAY;

/// Worked minutes split into normal and loading buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteSplit {
    /// Minutes at the base rate.
    pub normal: u32,
    /// Minutes at the loading rate.
    pub loading: u32,
}

impl MinuteSplit {
    /// Sum of both buckets.
    pub fn total(self) -> u32 {
        self.normal + self.loading
    }
}

impl Add for MinuteSplit {
    type Output = MinuteSplit;

    fn add(self, other: MinuteSplit) -> MinuteSplit {
        MinuteSplit {
            normal: self.normal + other.normal,
            loading: self.loading + other.loading,
        }
    }
}

/// The part of a shift that falls within one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// 0 for the day the shift started, 1 for the day after.
    pub day_offset: u32,
    /// Start as minutes since that day's midnight.
    pub start: u32,
    /// End as minutes since that day's midnight (at most 1440).
    pub end: u32,
}

impl DaySegment {
    /// Length of the segment in minutes.
    pub fn minutes(&self) -> u32 {
        self.end - self.start
    }
}

/// Rolls an end time forward a day when it is earlier than the start.
///
/// ```
/// use hourcalc::calculation::roll_forward_end;
///
/// assert_eq!(roll_forward_end(540, 1020), 1020);
/// assert_eq!(roll_forward_end(1260, 360), 1800);
/// assert_eq!(roll_forward_end(600, 600), 600);
/// ```
pub fn roll_forward_end(start: u32, end: u32) -> u32 {
    if end < start {
        end + MINUTES_PER_DAY
    } else {
        end
    }
}

/// Splits a single-day range `[start, end)` against the premium threshold.
///
/// Minutes before the threshold are normal; minutes at or after it are loading.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::split_by_threshold;
///
/// // 2:00 PM - 11:00 PM against 6:30 PM
/// let split = split_by_threshold(840, 1380, 1110);
/// assert_eq!(split.normal, 270);
/// assert_eq!(split.loading, 270);
/// ```
pub fn split_by_threshold(start: u32, end: u32, threshold: u32) -> MinuteSplit {
    let end = end.max(start);

    if end <= threshold {
        MinuteSplit {
            normal: end - start,
            loading: 0,
        }
    } else if start >= threshold {
        MinuteSplit {
            normal: 0,
            loading: end - start,
        }
    } else {
        MinuteSplit {
            normal: threshold - start,
            loading: end - threshold,
        }
    }
}

/// Segments a shift by day boundaries.
///
/// `end` must already be rolled forward (see [`roll_forward_end`]), so it is
/// at most two days past midnight of the start day. Empty segments are
/// dropped, so a zero-length shift yields no segments.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::segment_by_day;
///
/// // 9:00 PM - 6:00 AM
/// let segments = segment_by_day(1260, 1800);
/// assert_eq!(segments.len(), 2);
/// assert_eq!((segments[0].start, segments[0].end), (1260, 1440));
/// assert_eq!((segments[1].start, segments[1].end), (0, 360));
/// ```
pub fn segment_by_day(start: u32, end: u32) -> Vec<DaySegment> {
    let mut segments = Vec::with_capacity(2);

    if end <= MINUTES_PER_DAY {
        segments.push(DaySegment {
            day_offset: 0,
            start,
            end: end.max(start),
        });
    } else {
        segments.push(DaySegment {
            day_offset: 0,
            start,
            end: MINUTES_PER_DAY,
        });
        segments.push(DaySegment {
            day_offset: 1,
            start: 0,
            end: (end - MINUTES_PER_DAY).min(MINUTES_PER_DAY),
        });
    }

    segments.retain(|segment| segment.minutes() > 0);
    segments
}

/// Splits a whole shift into normal and loading minutes.
///
/// Weekday segments are each split against `threshold`. On Saturday and
/// Sunday the threshold is ignored and every worked minute is loading.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::{DayType, split_shift};
///
/// // 9:00 PM - 6:00 AM on a weekday against 6:30 PM
/// let split = split_shift(1260, 360, 1110, DayType::Weekday);
/// assert_eq!(split.loading, 180);
/// assert_eq!(split.normal, 360);
///
/// let sunday = split_shift(1260, 360, 1110, DayType::Sunday);
/// assert_eq!(sunday.loading, 540);
/// assert_eq!(sunday.normal, 0);
/// ```
pub fn split_shift(start: u32, end: u32, threshold: u32, day_type: DayType) -> MinuteSplit {
    let end = roll_forward_end(start, end);

    segment_by_day(start, end)
        .iter()
        .map(|segment| {
            if day_type.is_weekend() {
                MinuteSplit {
                    normal: 0,
                    loading: segment.minutes(),
                }
            } else {
                split_by_threshold(segment.start, segment.end, threshold)
            }
        })
        .fold(MinuteSplit::default(), |acc, split| acc + split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const THRESHOLD: u32 = 1110; // 6:30 PM

    #[test]
    fn test_all_normal_before_threshold() {
        // 9:00 AM - 5:00 PM
        let split = split_by_threshold(540, 1020, THRESHOLD);
        assert_eq!(split, MinuteSplit { normal: 480, loading: 0 });
    }

    #[test]
    fn test_end_exactly_at_threshold_is_normal() {
        let split = split_by_threshold(600, THRESHOLD, THRESHOLD);
        assert_eq!(split, MinuteSplit { normal: 510, loading: 0 });
    }

    #[test]
    fn test_start_at_threshold_is_loading() {
        let split = split_by_threshold(THRESHOLD, 1380, THRESHOLD);
        assert_eq!(split, MinuteSplit { normal: 0, loading: 270 });
    }

    #[test]
    fn test_crossing_threshold() {
        let split = split_by_threshold(840, 1380, THRESHOLD);
        assert_eq!(split, MinuteSplit { normal: 270, loading: 270 });
    }

    #[test]
    fn test_zero_length_range() {
        assert_eq!(split_by_threshold(600, 600, THRESHOLD), MinuteSplit::default());
        assert_eq!(split_by_threshold(1200, 1200, THRESHOLD), MinuteSplit::default());
    }

    #[test]
    fn test_segment_single_day() {
        let segments = segment_by_day(540, 1020);
        assert_eq!(
            segments,
            vec![DaySegment { day_offset: 0, start: 540, end: 1020 }]
        );
    }

    #[test]
    fn test_segment_ending_at_midnight_is_one_segment() {
        let segments = segment_by_day(1260, MINUTES_PER_DAY);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].minutes(), 180);
    }

    #[test]
    fn test_segment_zero_length_shift_is_empty() {
        assert!(segment_by_day(600, 600).is_empty());
    }

    #[test]
    fn test_overnight_shift_weekday() {
        // 9:00 PM - 6:00 AM: 180 loading before midnight, 360 normal after
        let split = split_shift(1260, 360, THRESHOLD, DayType::Weekday);
        assert_eq!(split, MinuteSplit { normal: 360, loading: 180 });
    }

    #[test]
    fn test_overnight_shift_crossing_both_thresholds() {
        // 8:00 PM - 7:30 PM next day against a 7:00 PM threshold
        // day 1: [20:00, 24:00) -> 240 loading
        // day 2: [00:00, 19:30) -> 1140 normal, 30 loading
        let split = split_shift(1200, 1170, 1140, DayType::Weekday);
        assert_eq!(split, MinuteSplit { normal: 1140, loading: 270 });
    }

    #[test]
    fn test_early_threshold_applies_after_midnight() {
        // 10:00 PM - 4:00 AM against a 2:00 AM threshold
        // day 1: [22:00, 24:00) -> 120 loading
        // day 2: [00:00, 04:00) -> 120 normal, 120 loading
        let split = split_shift(1320, 240, 120, DayType::Weekday);
        assert_eq!(split, MinuteSplit { normal: 120, loading: 240 });
    }

    #[test]
    fn test_saturday_is_all_loading() {
        let split = split_shift(540, 1020, THRESHOLD, DayType::Saturday);
        assert_eq!(split, MinuteSplit { normal: 0, loading: 480 });
    }

    #[test]
    fn test_sunday_overnight_is_all_loading() {
        let split = split_shift(1260, 360, THRESHOLD, DayType::Sunday);
        assert_eq!(split, MinuteSplit { normal: 0, loading: 540 });
    }

    #[test]
    fn test_zero_length_shift() {
        assert_eq!(split_shift(600, 600, THRESHOLD, DayType::Weekday).total(), 0);
        assert_eq!(split_shift(600, 600, THRESHOLD, DayType::Sunday).total(), 0);
    }

    proptest! {
        #[test]
        fn prop_split_conserves_duration(
            start in 0u32..MINUTES_PER_DAY,
            end in 0u32..MINUTES_PER_DAY,
            threshold in 0u32..MINUTES_PER_DAY,
            weekend in any::<bool>(),
        ) {
            let day_type = if weekend { DayType::Sunday } else { DayType::Weekday };
            let duration = roll_forward_end(start, end) - start;
            let split = split_shift(start, end, threshold, day_type);
            prop_assert_eq!(split.total(), duration);
        }
    }
}
