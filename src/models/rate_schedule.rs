//! Rate schedule model.
//!
//! The [`RateSchedule`] holds the base hourly rate, the optional alternate
//! rate used by flagged shifts, the weekday premium threshold, and the
//! loading percentage for each day category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default base hourly rate ($26.9797).
pub const DEFAULT_BASE_RATE: Decimal = Decimal::from_parts(269797, 0, 0, false, 4);

/// Default weekday premium threshold: 6:30 PM as minutes since midnight.
pub const DEFAULT_PREMIUM_THRESHOLD: u32 = 18 * 60 + 30;

/// Default weekday loading after the threshold (25%).
pub const DEFAULT_WEEKDAY_LOADING: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Default all-day Saturday loading (25%).
pub const DEFAULT_SATURDAY_LOADING: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Default all-day Sunday loading (50%).
pub const DEFAULT_SUNDAY_LOADING: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

/// Base rate, premium threshold and loading percentages for a calculation.
///
/// # Example
///
/// ```
/// use hourcalc::models::RateSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = RateSchedule::default();
/// assert_eq!(schedule.base_rate, Decimal::from_str("26.9797").unwrap());
/// assert_eq!(schedule.premium_threshold, 1110);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Hourly base rate.
    pub base_rate: Decimal,
    /// Hourly base rate for shifts with `rate_override` set.
    /// When absent, flagged shifts are paid at `base_rate`.
    pub alternate_base_rate: Option<Decimal>,
    /// Minutes since midnight at which the weekday premium begins.
    pub premium_threshold: u32,
    /// Weekday loading applied after the threshold, as a fraction (0.25 = 25%).
    pub weekday_loading: Decimal,
    /// Saturday loading applied to the whole shift.
    pub saturday_loading: Decimal,
    /// Sunday loading applied to the whole shift.
    pub sunday_loading: Decimal,
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            alternate_base_rate: None,
            premium_threshold: DEFAULT_PREMIUM_THRESHOLD,
            weekday_loading: DEFAULT_WEEKDAY_LOADING,
            saturday_loading: DEFAULT_SATURDAY_LOADING,
            sunday_loading: DEFAULT_SUNDAY_LOADING,
        }
    }
}

impl RateSchedule {
    /// Returns a copy with a different base rate. Negative rates clamp to zero.
    pub fn with_base_rate(mut self, base_rate: Decimal) -> Self {
        self.base_rate = base_rate.max(Decimal::ZERO);
        self
    }

    /// Returns a copy with an alternate base rate for flagged shifts.
    pub fn with_alternate_base_rate(mut self, rate: Decimal) -> Self {
        self.alternate_base_rate = Some(rate.max(Decimal::ZERO));
        self
    }

    /// Returns a copy with a different premium threshold (minutes since midnight).
    pub fn with_premium_threshold(mut self, minutes: u32) -> Self {
        self.premium_threshold = minutes;
        self
    }
}
