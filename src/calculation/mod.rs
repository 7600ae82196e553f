//! Calculation logic for the HourCalc pay engine.
//!
//! This module contains the pure functions that turn shifts into pay:
//! clock time normalization, day detection, normal/loading minute
//! splitting across midnight, break deduction, effective base rate lookup
//! and weekly aggregation.

mod base_rate;
mod break_allocation;
mod day_detection;
mod pay_aggregator;
mod segment_splitter;
mod time_normalizer;

pub use base_rate::{BaseRateLookupResult, RateSource, get_base_rate};
pub use break_allocation::{BreakBucket, apply_break, break_bucket};
pub use day_detection::{DayType, get_day_type};
pub use pay_aggregator::{aggregate, calculate_shift, rate_summary};
pub use segment_splitter::{
    DaySegment, MinuteSplit, roll_forward_end, segment_by_day, split_by_threshold, split_shift,
};
pub use time_normalizer::{MINUTES_PER_DAY, normalize_clock_time, normalize_time};
