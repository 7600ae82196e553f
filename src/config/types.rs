//! Configuration types for the rate schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML schedule file. Every field is optional.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::normalize_clock_time;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClockTime, DEFAULT_BASE_RATE, DEFAULT_PREMIUM_THRESHOLD, DEFAULT_SATURDAY_LOADING,
    DEFAULT_SUNDAY_LOADING, DEFAULT_WEEKDAY_LOADING, RateSchedule,
};

/// Loading percentages by day category, as fractions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Weekday loading after the premium threshold.
    pub weekday: Decimal,
    /// Saturday all-day loading.
    pub saturday: Decimal,
    /// Sunday all-day loading.
    pub sunday: Decimal,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            weekday: DEFAULT_WEEKDAY_LOADING,
            saturday: DEFAULT_SATURDAY_LOADING,
            sunday: DEFAULT_SUNDAY_LOADING,
        }
    }
}

/// The schedule file structure.
///
/// ```yaml
/// base_rate: "26.9797"
/// alternate_base_rate: null
/// premium_threshold: { hour: 6, minute: 30, meridiem: PM }
/// loadings:
///   weekday: "0.25"
///   saturday: "0.25"
///   sunday: "0.50"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Hourly base rate.
    pub base_rate: Decimal,
    /// Hourly rate for shifts flagged with a rate override.
    pub alternate_base_rate: Option<Decimal>,
    /// Clock time at which the weekday premium begins.
    pub premium_threshold: ClockTime,
    /// Loading percentages.
    pub loadings: LoadingConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            alternate_base_rate: None,
            premium_threshold: ClockTime::from_minutes(DEFAULT_PREMIUM_THRESHOLD),
            loadings: LoadingConfig::default(),
        }
    }
}

impl ScheduleConfig {
    /// Validates the configuration and builds a [`RateSchedule`].
    ///
    /// Negative rates clamp to zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] with subject
    /// `"premium threshold"` if the threshold is not a valid clock time.
    pub fn into_schedule(self) -> EngineResult<RateSchedule> {
        let threshold = normalize_clock_time(&self.premium_threshold).map_err(|err| {
            EngineError::InvalidInput {
                subject: "premium threshold".to_string(),
                message: err.to_string(),
            }
        })?;

        let mut schedule = RateSchedule {
            weekday_loading: self.loadings.weekday,
            saturday_loading: self.loadings.saturday,
            sunday_loading: self.loadings.sunday,
            ..RateSchedule::default()
        }
        .with_base_rate(self.base_rate)
        .with_premium_threshold(threshold);

        if let Some(rate) = self.alternate_base_rate {
            schedule = schedule.with_alternate_base_rate(rate);
        }

        Ok(schedule)
    }
}
