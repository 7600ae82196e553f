//! Day detection for premium rates.
//!
//! Maps a shift's [`ShiftDay`] to the premium rule it is paid under and
//! looks up the matching loading percentage in the [`RateSchedule`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RateSchedule, ShiftDay};

/// Represents the type of day for premium calculation.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, or no day given: loading only after the threshold.
    Weekday,
    /// Saturday: loading on every worked minute.
    Saturday,
    /// Sunday: loading on every worked minute.
    Sunday,
}

impl DayType {
    /// Whether every worked minute is loading, regardless of the threshold.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }

    /// The loading percentage this day type earns under `schedule`.
    pub fn loading_percentage(self, schedule: &RateSchedule) -> Decimal {
        match self {
            DayType::Weekday => schedule.weekday_loading,
            DayType::Saturday => schedule.saturday_loading,
            DayType::Sunday => schedule.sunday_loading,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a shift day.
///
/// [`ShiftDay::Unspecified`] falls back to [`DayType::Weekday`].
///
/// # Example
///
/// ```
/// use hourcalc::calculation::{DayType, get_day_type};
/// use hourcalc::models::ShiftDay;
///
/// assert_eq!(get_day_type(ShiftDay::Sunday), DayType::Sunday);
/// assert_eq!(get_day_type(ShiftDay::Friday), DayType::Weekday);
/// assert_eq!(get_day_type(ShiftDay::Unspecified), DayType::Weekday);
/// ```
pub fn get_day_type(day: ShiftDay) -> DayType {
    match day {
        ShiftDay::Saturday => DayType::Saturday,
        ShiftDay::Sunday => DayType::Sunday,
        _ => DayType::Weekday,
    }
}
