//! Core data models for the HourCalc pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod clock;
mod rate_schedule;
mod shift;

pub use calculation_result::{AuditStep, RateSummary, ShiftResult, WeekCalculation, WeekTotals};
pub use clock::{ClockTime, Meridiem};
pub use rate_schedule::{
    DEFAULT_BASE_RATE, DEFAULT_PREMIUM_THRESHOLD, DEFAULT_SATURDAY_LOADING,
    DEFAULT_SUNDAY_LOADING, DEFAULT_WEEKDAY_LOADING, RateSchedule,
};
pub use shift::{Shift, ShiftDay};
