//! Request types for the HourCalc API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/export/csv` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::normalize_clock_time;
use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, RateSchedule, Shift, ShiftDay};

/// Request body for the `/calculate` and `/export/csv` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Label for the week, used in exports.
    #[serde(default)]
    pub week_label: String,
    /// Per-request changes to the configured schedule.
    #[serde(default)]
    pub schedule: Option<ScheduleOverrides>,
    /// The shifts worked during the week.
    pub shifts: Vec<ShiftRequest>,
}

/// Schedule fields a request may override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleOverrides {
    /// Replacement base hourly rate.
    #[serde(default)]
    pub base_rate: Option<Decimal>,
    /// Replacement alternate base rate for flagged shifts.
    #[serde(default)]
    pub alternate_base_rate: Option<Decimal>,
    /// Replacement weekday premium threshold.
    #[serde(default)]
    pub premium_threshold: Option<ClockTime>,
}

impl ScheduleOverrides {
    /// Applies the overrides on top of the configured schedule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the threshold override is not
    /// a valid clock time.
    pub fn apply(&self, base: &RateSchedule) -> EngineResult<RateSchedule> {
        let mut schedule = base.clone();

        if let Some(rate) = self.base_rate {
            schedule = schedule.with_base_rate(rate);
        }
        if let Some(rate) = self.alternate_base_rate {
            schedule = schedule.with_alternate_base_rate(rate);
        }
        if let Some(threshold) = &self.premium_threshold {
            let minutes = normalize_clock_time(threshold).map_err(|err| {
                EngineError::InvalidInput {
                    subject: "premium threshold".to_string(),
                    message: err.to_string(),
                }
            })?;
            schedule = schedule.with_premium_threshold(minutes);
        }

        Ok(schedule)
    }
}

fn default_true() -> bool {
    true
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Free-text shift name.
    #[serde(default)]
    pub label: String,
    /// Day name. When absent the day is taken from the label.
    #[serde(default)]
    pub day: Option<String>,
    /// Start clock time.
    pub start: ClockTime,
    /// End clock time.
    pub end: ClockTime,
    /// Unpaid break minutes.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the break was taken before the premium threshold.
    #[serde(default = "default_true")]
    pub break_before_threshold: bool,
    /// Pay at the alternate base rate.
    #[serde(default)]
    pub rate_override: bool,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        let day = ShiftDay::resolve(req.day.as_deref(), &req.label);
        Shift {
            label: req.label,
            day,
            start: req.start,
            end: req.end,
            break_minutes: req.break_minutes,
            break_before_threshold: req.break_before_threshold,
            rate_override: req.rate_override,
        }
    }
}
