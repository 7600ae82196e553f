//! Effective base rate lookup.
//!
//! A shift flagged with `rate_override` is paid at the schedule's alternate
//! base rate instead of the configured one.

use rust_decimal::Decimal;

use crate::models::{RateSchedule, Shift};

/// Where the effective base rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    /// The schedule's configured base rate.
    Configured,
    /// The schedule's alternate base rate.
    Alternate,
}

/// The result of a base rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseRateLookupResult {
    /// The hourly rate to pay the shift at.
    pub rate: Decimal,
    /// Which schedule field supplied the rate.
    pub source: RateSource,
}

/// Returns the hourly base rate for a shift.
///
/// A flagged shift uses `alternate_base_rate`. If the schedule has no
/// alternate rate, flagged shifts fall back to `base_rate`.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::{RateSource, get_base_rate};
/// use hourcalc::models::{ClockTime, RateSchedule, Shift, ShiftDay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule::default()
///     .with_alternate_base_rate(Decimal::from_str("30.50").unwrap());
/// let shift = Shift::new("Monday", ShiftDay::Monday, ClockTime::am(9, 0), ClockTime::pm(5, 0))
///     .with_rate_override();
///
/// let result = get_base_rate(&shift, &schedule);
/// assert_eq!(result.rate, Decimal::from_str("30.50").unwrap());
/// assert_eq!(result.source, RateSource::Alternate);
/// ```
pub fn get_base_rate(shift: &Shift, schedule: &RateSchedule) -> BaseRateLookupResult {
    match (shift.rate_override, schedule.alternate_base_rate) {
        (true, Some(rate)) => BaseRateLookupResult {
            rate,
            source: RateSource::Alternate,
        },
        _ => BaseRateLookupResult {
            rate: schedule.base_rate,
            source: RateSource::Configured,
        },
    }
}
