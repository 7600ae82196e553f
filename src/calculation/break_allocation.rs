//! Break deduction.
//!
//! Unpaid break minutes come out of exactly one bucket. On weekends that
//! is always the loading bucket; on weekdays the shift says whether the
//! break was taken before or after the premium threshold.

use serde::{Deserialize, Serialize};

use super::day_detection::DayType;
use super::segment_splitter::MinuteSplit;

/// The bucket a break is deducted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakBucket {
    /// Deducted from normal minutes.
    Normal,
    /// Deducted from loading minutes.
    Loading,
}

/// Picks the bucket a break is deducted from.
///
/// Weekend shifts ignore `before_threshold` and always use the loading bucket.
pub fn break_bucket(day_type: DayType, before_threshold: bool) -> BreakBucket {
    if day_type.is_weekend() || !before_threshold {
        BreakBucket::Loading
    } else {
        BreakBucket::Normal
    }
}

/// Deducts `break_minutes` from the chosen bucket, flooring it at zero.
///
/// The other bucket is never touched, so a break longer than its bucket
/// is only partly deducted.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::{BreakBucket, DayType, MinuteSplit, apply_break};
///
/// let split = MinuteSplit { normal: 270, loading: 20 };
/// let (after, bucket) = apply_break(split, 30, false, DayType::Weekday);
/// assert_eq!(bucket, BreakBucket::Loading);
/// assert_eq!(after, MinuteSplit { normal: 270, loading: 0 });
/// ```
pub fn apply_break(
    split: MinuteSplit,
    break_minutes: u32,
    before_threshold: bool,
    day_type: DayType,
) -> (MinuteSplit, BreakBucket) {
    let bucket = break_bucket(day_type, before_threshold);
    let adjusted = match bucket {
        BreakBucket::Normal => MinuteSplit {
            normal: split.normal.saturating_sub(break_minutes),
            ..split
        },
        BreakBucket::Loading => MinuteSplit {
            loading: split.loading.saturating_sub(break_minutes),
            ..split
        },
    };
    (adjusted, bucket)
}
