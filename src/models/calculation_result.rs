//! Calculation result models for the HourCalc pay engine.
//!
//! This module contains the [`WeekCalculation`] type and its associated
//! structures: the per-shift breakdown, the weekly totals, the rate summary
//! and the audit steps explaining each shift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{BreakBucket, DayType};
use crate::error::{EngineError, EngineResult};

/// A single step in a shift's audit trail recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number within the shift.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Computed breakdown of one shift.
///
/// Derived from a [`crate::models::Shift`] and a
/// [`crate::models::RateSchedule`]; recomputed on every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// The shift label, or "Shift N" when the label is blank.
    pub label: String,
    /// The premium rule the shift was paid under.
    pub day_type: DayType,
    /// Start as minutes since midnight.
    pub start_minute: u32,
    /// End as minutes since the start day's midnight (past 1440 for overnight shifts).
    pub end_minute: u32,
    /// Worked minutes before the break was deducted.
    pub raw_minutes: u32,
    /// Minutes paid at the base rate.
    pub normal_minutes: u32,
    /// Minutes paid at the loading rate.
    pub loading_minutes: u32,
    /// `normal_minutes + loading_minutes`.
    pub total_minutes: u32,
    /// Break minutes requested for the shift.
    pub break_minutes: u32,
    /// The bucket the break was deducted from.
    pub break_bucket: BreakBucket,
    /// Effective hourly base rate (alternate rate if the shift was flagged).
    pub base_rate: Decimal,
    /// Loading percentage for the shift's day category, as a fraction.
    pub loading_percentage: Decimal,
    /// `base_rate * (1 + loading_percentage)`.
    pub loading_rate: Decimal,
    /// Pay for the normal minutes.
    pub normal_pay: Decimal,
    /// Pay for the loading minutes.
    pub loading_pay: Decimal,
    /// `normal_pay + loading_pay`.
    pub total_pay: Decimal,
    /// How the figures above were reached.
    pub audit_steps: Vec<AuditStep>,
}

/// Weekly sums across every shift result.
///
/// # Example
///
/// ```
/// use hourcalc::models::WeekTotals;
/// use rust_decimal::Decimal;
///
/// let totals = WeekTotals::default();
/// assert_eq!(totals.total_minutes, 0);
/// assert_eq!(totals.total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekTotals {
    /// Total normal minutes.
    pub normal_minutes: u32,
    /// Total loading minutes.
    pub loading_minutes: u32,
    /// Total paid minutes.
    pub total_minutes: u32,
    /// Total pay at the base rate.
    pub normal_pay: Decimal,
    /// Total pay at loading rates.
    pub loading_pay: Decimal,
    /// `normal_pay + loading_pay`.
    pub total_pay: Decimal,
}

impl WeekTotals {
    /// Adds one shift's minutes and pay to the running totals.
    ///
    /// The totals are left unchanged when any sum would overflow.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if a total overflows.
    pub fn accumulate(&mut self, shift: &ShiftResult) -> EngineResult<()> {
        *self = self
            .checked_sum(shift)
            .ok_or_else(|| EngineError::InvalidInput {
                subject: "week totals".to_string(),
                message: format!("adding '{}' overflows the weekly totals", shift.label),
            })?;
        Ok(())
    }

    fn checked_sum(&self, shift: &ShiftResult) -> Option<WeekTotals> {
        let normal_pay = self.normal_pay.checked_add(shift.normal_pay)?;
        let loading_pay = self.loading_pay.checked_add(shift.loading_pay)?;
        Some(WeekTotals {
            normal_minutes: self.normal_minutes.checked_add(shift.normal_minutes)?,
            loading_minutes: self.loading_minutes.checked_add(shift.loading_minutes)?,
            total_minutes: self.total_minutes.checked_add(shift.total_minutes)?,
            total_pay: normal_pay.checked_add(loading_pay)?,
            normal_pay,
            loading_pay,
        })
    }
}

/// The configured rates reported alongside a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSummary {
    /// Configured base hourly rate.
    pub base_rate: Decimal,
    /// Alternate base rate for flagged shifts, if configured.
    pub alternate_base_rate: Option<Decimal>,
    /// Base rate with the weekday loading applied.
    pub weekday_loading_rate: Decimal,
    /// Base rate with the Saturday loading applied.
    pub saturday_loading_rate: Decimal,
    /// Base rate with the Sunday loading applied.
    pub sunday_loading_rate: Decimal,
}

/// The complete output of a weekly pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculation {
    /// Per-shift results, in input order.
    pub shifts: Vec<ShiftResult>,
    /// Sums across all shifts.
    pub totals: WeekTotals,
    /// The rates the calculation used.
    pub rates: RateSummary,
}
