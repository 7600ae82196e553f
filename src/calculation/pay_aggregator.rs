//! Weekly pay aggregation.
//!
//! Runs every shift through normalization, splitting, break deduction and
//! pay, then sums the per-shift results into [`WeekTotals`]. The whole
//! calculation fails on the first invalid shift; no partial totals are
//! produced.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, ClockTime, RateSchedule, RateSummary, Shift, ShiftResult, WeekCalculation,
    WeekTotals,
};

use super::base_rate::{RateSource, get_base_rate};
use super::break_allocation::apply_break;
use super::day_detection::{DayType, get_day_type};
use super::segment_splitter::{roll_forward_end, segment_by_day, split_shift};
use super::time_normalizer::normalize_clock_time;

/// Converts minutes to hours as a [`Decimal`].
fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Turns an overflowed rate or pay product into an input error.
fn checked(value: Option<Decimal>, what: &str) -> EngineResult<Decimal> {
    value.ok_or_else(|| EngineError::InvalidInput {
        subject: "base rate".to_string(),
        message: format!("{} is too large to calculate", what),
    })
}

/// `rate × (1 + loading_percentage)`, failing instead of overflowing.
fn loaded_rate(rate: Decimal, loading_percentage: Decimal) -> EngineResult<Decimal> {
    checked(
        Decimal::ONE
            .checked_add(loading_percentage)
            .and_then(|multiplier| rate.checked_mul(multiplier)),
        "loading rate",
    )
}

fn normalize_field(time: &ClockTime, label: &str, field: &str) -> EngineResult<u32> {
    normalize_clock_time(time).map_err(|err| EngineError::InvalidInput {
        subject: label.to_string(),
        message: format!("{} time: {}", field, err),
    })
}

/// Calculates pay for a single shift.
///
/// `index` is the shift's zero-based position, used to name shifts that
/// have no label.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] naming the shift when its start or
/// end time is invalid, or naming the base rate when the rate is too large
/// for the pay to be represented.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::calculate_shift;
/// use hourcalc::models::{ClockTime, RateSchedule, Shift, ShiftDay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shift = Shift::new("Monday", ShiftDay::Monday, ClockTime::am(9, 0), ClockTime::pm(5, 0));
/// let result = calculate_shift(&shift, 0, &RateSchedule::default()).unwrap();
///
/// assert_eq!(result.normal_minutes, 480);
/// assert_eq!(result.loading_minutes, 0);
/// assert_eq!(result.total_pay, Decimal::from_str("215.8376").unwrap());
/// ```
pub fn calculate_shift(
    shift: &Shift,
    index: usize,
    schedule: &RateSchedule,
) -> EngineResult<ShiftResult> {
    let label = shift.display_label(index);
    let mut audit_steps = Vec::new();

    // Step 1: normalize clock times
    let start = normalize_field(&shift.start, &label, "start")?;
    let raw_end = normalize_field(&shift.end, &label, "end")?;
    let end = roll_forward_end(start, raw_end);
    let raw_minutes = end - start;

    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "time_normalization".to_string(),
        rule_name: "Clock Time Normalization".to_string(),
        input: serde_json::json!({
            "start": shift.start.to_string(),
            "end": shift.end.to_string()
        }),
        output: serde_json::json!({
            "start_minute": start,
            "end_minute": end,
            "raw_minutes": raw_minutes,
            "overnight": end > raw_end
        }),
        reasoning: if end > raw_end {
            format!(
                "End {} is before start {}: shift runs overnight ({} minutes)",
                shift.end, shift.start, raw_minutes
            )
        } else {
            format!("Shift runs {} minutes", raw_minutes)
        },
    });

    // Step 2: split into normal and loading minutes
    let day_type = get_day_type(shift.day);
    let split = split_shift(start, raw_end, schedule.premium_threshold, day_type);
    let segments = segment_by_day(start, end);

    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "segment_split".to_string(),
        rule_name: "Normal/Loading Split".to_string(),
        input: serde_json::json!({
            "day": shift.day.to_string(),
            "day_type": day_type.to_string(),
            "premium_threshold": ClockTime::from_minutes(schedule.premium_threshold).to_string(),
            "segments": segments
                .iter()
                .map(|s| serde_json::json!({
                    "day_offset": s.day_offset,
                    "start": s.start,
                    "end": s.end
                }))
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "normal_minutes": split.normal,
            "loading_minutes": split.loading
        }),
        reasoning: if day_type.is_weekend() {
            format!(
                "{} shift: all {} minutes are loading",
                day_type,
                split.total()
            )
        } else {
            format!(
                "Split at {} across {} segment(s): {} normal, {} loading",
                ClockTime::from_minutes(schedule.premium_threshold),
                segments.len(),
                split.normal,
                split.loading
            )
        },
    });

    // Step 3: deduct the break
    let (worked, bucket) = apply_break(
        split,
        shift.break_minutes,
        shift.break_before_threshold,
        day_type,
    );

    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "break_deduction".to_string(),
        rule_name: "Break Deduction".to_string(),
        input: serde_json::json!({
            "break_minutes": shift.break_minutes,
            "break_before_threshold": shift.break_before_threshold,
            "weekend": day_type.is_weekend()
        }),
        output: serde_json::json!({
            "bucket": bucket,
            "normal_minutes": worked.normal,
            "loading_minutes": worked.loading
        }),
        reasoning: format!(
            "Deducted {} break minute(s) from {:?} bucket",
            shift.break_minutes, bucket
        ),
    });

    // Step 4: pay
    let base = get_base_rate(shift, schedule);
    let loading_percentage = day_type.loading_percentage(schedule);
    let loading_rate = loaded_rate(base.rate, loading_percentage)?;
    let normal_pay = checked(
        minutes_to_hours(worked.normal).checked_mul(base.rate),
        "normal pay",
    )?;
    let loading_pay = checked(
        minutes_to_hours(worked.loading).checked_mul(loading_rate),
        "loading pay",
    )?;
    let total_pay = checked(normal_pay.checked_add(loading_pay), "total pay")?;

    audit_steps.push(AuditStep {
        step_number: 4,
        rule_id: "shift_pay".to_string(),
        rule_name: "Shift Pay".to_string(),
        input: serde_json::json!({
            "base_rate": base.rate.normalize().to_string(),
            "rate_source": match base.source {
                RateSource::Configured => "configured",
                RateSource::Alternate => "alternate",
            },
            "loading_percentage": loading_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "loading_rate": loading_rate.normalize().to_string(),
            "normal_pay": normal_pay.normalize().to_string(),
            "loading_pay": loading_pay.normalize().to_string(),
            "total_pay": total_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{}h × ${} + {}h × ${} = ${}",
            minutes_to_hours(worked.normal).round_dp(4).normalize(),
            base.rate.normalize(),
            minutes_to_hours(worked.loading).round_dp(4).normalize(),
            loading_rate.normalize(),
            total_pay.round_dp(4).normalize()
        ),
    });

    debug!(
        shift = %label,
        day_type = %day_type,
        normal_minutes = worked.normal,
        loading_minutes = worked.loading,
        break_minutes = shift.break_minutes,
        total_pay = %total_pay,
        "Shift calculated"
    );

    Ok(ShiftResult {
        label,
        day_type,
        start_minute: start,
        end_minute: end,
        raw_minutes,
        normal_minutes: worked.normal,
        loading_minutes: worked.loading,
        total_minutes: worked.total(),
        break_minutes: shift.break_minutes,
        break_bucket: bucket,
        base_rate: base.rate,
        loading_percentage,
        loading_rate,
        normal_pay,
        loading_pay,
        total_pay,
        audit_steps,
    })
}

/// Summarises the configured rates for display alongside a calculation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if a loaded rate overflows.
pub fn rate_summary(schedule: &RateSchedule) -> EngineResult<RateSummary> {
    let loaded =
        |day_type: DayType| loaded_rate(schedule.base_rate, day_type.loading_percentage(schedule));

    Ok(RateSummary {
        base_rate: schedule.base_rate,
        alternate_base_rate: schedule.alternate_base_rate,
        weekday_loading_rate: loaded(DayType::Weekday)?,
        saturday_loading_rate: loaded(DayType::Saturday)?,
        sunday_loading_rate: loaded(DayType::Sunday)?,
    })
}

/// Calculates pay for a week of shifts.
///
/// Shifts are processed in input order; the order only affects the order
/// of the per-shift results. Nothing is rounded.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for the first shift with an
/// invalid start or end time, or when the base rate is too large for the
/// pay to be represented.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::aggregate;
/// use hourcalc::models::{ClockTime, RateSchedule, Shift, ShiftDay};
///
/// let shifts = vec![
///     Shift::new("Monday", ShiftDay::Monday, ClockTime::am(9, 0), ClockTime::pm(5, 0)),
///     Shift::new("Sunday", ShiftDay::Sunday, ClockTime::am(9, 0), ClockTime::pm(1, 0)),
/// ];
///
/// let week = aggregate(&shifts, &RateSchedule::default()).unwrap();
/// assert_eq!(week.totals.normal_minutes, 480);
/// assert_eq!(week.totals.loading_minutes, 240);
/// assert_eq!(week.shifts.len(), 2);
/// ```
pub fn aggregate(shifts: &[Shift], schedule: &RateSchedule) -> EngineResult<WeekCalculation> {
    let results = shifts
        .iter()
        .enumerate()
        .map(|(index, shift)| calculate_shift(shift, index, schedule))
        .collect::<EngineResult<Vec<_>>>()?;

    let mut totals = WeekTotals::default();
    for result in &results {
        totals.accumulate(result)?;
    }

    debug!(
        shifts = results.len(),
        normal_minutes = totals.normal_minutes,
        loading_minutes = totals.loading_minutes,
        total_pay = %totals.total_pay,
        "Week aggregated"
    );

    Ok(WeekCalculation {
        shifts: results,
        totals,
        rates: rate_summary(schedule)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::BreakBucket;
    use crate::models::ShiftDay;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> RateSchedule {
        RateSchedule::default()
    }

    fn weekday(start: ClockTime, end: ClockTime) -> Shift {
        Shift::new("Wednesday", ShiftDay::Wednesday, start, end)
    }

    fn weekday_result(start: ClockTime, end: ClockTime) -> ShiftResult {
        calculate_shift(&weekday(start, end), 0, &schedule()).unwrap()
    }

    // ==========================================================================
    // Worked scenarios
    // ==========================================================================
    #[test]
    fn test_day_shift_is_all_normal() {
        let result = weekday_result(ClockTime::am(9, 0), ClockTime::pm(5, 0));

        assert_eq!(result.normal_minutes, 480);
        assert_eq!(result.loading_minutes, 0);
        assert_eq!(result.total_minutes, 480);
        // 8 × 26.9797
        assert_eq!(result.total_pay, dec("215.8376"));
    }

    #[test]
    fn test_afternoon_shift_crosses_threshold() {
        let result = weekday_result(ClockTime::pm(2, 0), ClockTime::pm(11, 0));

        assert_eq!(result.normal_minutes, 270);
        assert_eq!(result.loading_minutes, 270);
        // 4.5 × 26.9797
        assert_eq!(result.normal_pay, dec("121.40865"));
        // 4.5 × 26.9797 × 1.25
        assert_eq!(result.loading_pay, dec("151.7608125"));
        assert_eq!(result.total_pay, dec("273.1694625"));
    }

    #[test]
    fn test_overnight_weekday_shift() {
        let result = weekday_result(ClockTime::pm(9, 0), ClockTime::am(6, 0));

        assert_eq!(result.start_minute, 1260);
        assert_eq!(result.end_minute, 1800);
        assert_eq!(result.loading_minutes, 180);
        assert_eq!(result.normal_minutes, 360);
    }

    #[test]
    fn test_sunday_shift_is_all_loading_at_fifty_percent() {
        let shift = Shift::new("Sunday", ShiftDay::Sunday, ClockTime::am(9, 0), ClockTime::pm(5, 0))
            .with_break(30, true);
        let result = calculate_shift(&shift, 0, &schedule()).unwrap();

        assert_eq!(result.day_type, DayType::Sunday);
        assert_eq!(result.normal_minutes, 0);
        assert_eq!(result.loading_minutes, 450);
        assert_eq!(result.break_bucket, BreakBucket::Loading);
        assert_eq!(result.loading_percentage, dec("0.50"));
        // 7.5 × 26.9797 × 1.5
        assert_eq!(result.total_pay, dec("303.521625"));
    }

    #[test]
    fn test_saturday_shift_is_all_loading_at_twenty_five_percent() {
        let shift = Shift::new(
            "Saturday",
            ShiftDay::Saturday,
            ClockTime::am(8, 0),
            ClockTime::pm(12, 0),
        );
        let result = calculate_shift(&shift, 0, &schedule()).unwrap();

        assert_eq!(result.loading_minutes, 240);
        // 4 × 26.9797 × 1.25
        assert_eq!(result.total_pay, dec("134.8985"));
    }

    #[test]
    fn test_break_after_threshold_longer_than_loading_floors_at_zero() {
        // 1:00 PM - 7:00 PM: 330 normal, 30 loading
        let shift = weekday(ClockTime::pm(1, 0), ClockTime::pm(7, 0)).with_break(45, false);
        let result = calculate_shift(&shift, 0, &schedule()).unwrap();

        assert_eq!(result.normal_minutes, 330);
        assert_eq!(result.loading_minutes, 0);
        assert_eq!(result.break_minutes, 45);
    }

    #[test]
    fn test_zero_length_shift_pays_nothing() {
        let result = weekday_result(ClockTime::am(9, 0), ClockTime::am(9, 0));

        assert_eq!(result.total_minutes, 0);
        assert_eq!(result.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_unspecified_day_uses_weekday_rule() {
        let shift = Shift::new(
            "Late one",
            ShiftDay::Unspecified,
            ClockTime::pm(6, 0),
            ClockTime::pm(8, 0),
        );
        let result = calculate_shift(&shift, 0, &schedule()).unwrap();

        assert_eq!(result.day_type, DayType::Weekday);
        assert_eq!(result.normal_minutes, 30);
        assert_eq!(result.loading_minutes, 90);
    }

    #[test]
    fn test_rate_override_uses_alternate_rate() {
        let schedule = schedule().with_alternate_base_rate(dec("30"));
        let shift = weekday(ClockTime::am(9, 0), ClockTime::am(11, 0)).with_rate_override();
        let result = calculate_shift(&shift, 0, &schedule).unwrap();

        assert_eq!(result.base_rate, dec("30"));
        assert_eq!(result.total_pay, dec("60"));
    }

    #[test]
    fn test_custom_threshold() {
        let schedule = schedule().with_premium_threshold(17 * 60);
        let shift = weekday(ClockTime::am(9, 0), ClockTime::pm(7, 0));
        let result = calculate_shift(&shift, 0, &schedule).unwrap();

        assert_eq!(result.normal_minutes, 480);
        assert_eq!(result.loading_minutes, 120);
    }

    // ==========================================================================
    // Failure handling
    // ==========================================================================
    #[test]
    fn test_invalid_start_names_the_shift() {
        let shift = weekday(ClockTime::new(13, 0, "PM"), ClockTime::pm(5, 0));
        match calculate_shift(&shift, 0, &schedule()) {
            Err(EngineError::InvalidInput { subject, message }) => {
                assert_eq!(subject, "Wednesday");
                assert!(message.starts_with("start time"), "{}", message);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_end_on_unlabelled_shift_uses_position() {
        let shifts = vec![
            weekday(ClockTime::am(9, 0), ClockTime::pm(5, 0)),
            Shift::new("", ShiftDay::Friday, ClockTime::am(9, 0), ClockTime::new(5, 0, "XX")),
        ];

        match aggregate(&shifts, &schedule()) {
            Err(EngineError::InvalidInput { subject, message }) => {
                assert_eq!(subject, "Shift 2");
                assert!(message.starts_with("end time"), "{}", message);
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    // ==========================================================================
    // Aggregation
    // ==========================================================================
    #[test]
    fn test_aggregate_sums_shifts() {
        let shifts = vec![
            weekday(ClockTime::am(9, 0), ClockTime::pm(5, 0)),
            weekday(ClockTime::pm(2, 0), ClockTime::pm(11, 0)),
        ];

        let week = aggregate(&shifts, &schedule()).unwrap();

        assert_eq!(week.totals.normal_minutes, 750);
        assert_eq!(week.totals.loading_minutes, 270);
        assert_eq!(week.totals.total_minutes, 1020);
        assert_eq!(week.totals.normal_pay, dec("337.24625"));
        assert_eq!(week.totals.loading_pay, dec("151.7608125"));
        assert_eq!(week.totals.total_pay, dec("489.0070625"));
    }

    #[test]
    fn test_aggregate_empty_week() {
        let week = aggregate(&[], &schedule()).unwrap();
        assert!(week.shifts.is_empty());
        assert_eq!(week.totals, WeekTotals::default());
    }

    #[test]
    fn test_rate_summary() {
        let rates = rate_summary(&schedule()).unwrap();
        assert_eq!(rates.base_rate, dec("26.9797"));
        assert_eq!(rates.weekday_loading_rate, dec("33.724625"));
        assert_eq!(rates.saturday_loading_rate, dec("33.724625"));
        assert_eq!(rates.sunday_loading_rate, dec("40.46955"));
    }

    // ==========================================================================
    // Overflow
    // ==========================================================================
    fn assert_base_rate_error(result: EngineResult<WeekCalculation>) {
        match result {
            Err(EngineError::InvalidInput { subject, message }) => {
                assert_eq!(subject, "base rate");
                assert!(message.contains("too large"), "message was: {}", message);
            }
            other => panic!("Expected base rate error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_base_rate_on_sunday_is_an_error() {
        let sunday = ShiftDay::Sunday;
        let shift = Shift::new("Sunday", sunday, ClockTime::am(9, 0), ClockTime::pm(5, 0));
        let schedule = RateSchedule::default().with_base_rate(Decimal::MAX);

        assert_base_rate_error(aggregate(&[shift], &schedule));
    }

    #[test]
    fn test_max_base_rate_on_empty_week_is_an_error() {
        let schedule = RateSchedule::default().with_base_rate(Decimal::MAX);

        assert!(rate_summary(&schedule).is_err());
        assert_base_rate_error(aggregate(&[], &schedule));
    }

    #[test]
    fn test_max_alternate_rate_is_an_error() {
        let shift = weekday(ClockTime::am(9, 0), ClockTime::pm(5, 0)).with_rate_override();
        let schedule = RateSchedule::default().with_alternate_base_rate(Decimal::MAX);

        assert!(matches!(
            calculate_shift(&shift, 0, &schedule),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_large_rate_that_fits_still_calculates() {
        let shift = weekday(ClockTime::am(9, 0), ClockTime::pm(5, 0));
        let schedule = RateSchedule::default().with_base_rate(dec("1000000000"));

        let result = calculate_shift(&shift, 0, &schedule).unwrap();
        assert_eq!(result.total_pay, dec("8000000000"));
    }

    #[test]
    fn test_audit_steps_recorded() {
        let result = weekday_result(ClockTime::pm(9, 0), ClockTime::am(6, 0));

        let rule_ids: Vec<&str> = result.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec!["time_normalization", "segment_split", "break_deduction", "shift_pay"]
        );
        assert_eq!(result.audit_steps[0].output["overnight"], true);
        assert_eq!(
            result.audit_steps[1].input["segments"].as_array().unwrap().len(),
            2
        );
    }

    // ==========================================================================
    // Properties
    // ==========================================================================
    fn arb_clock_time() -> impl Strategy<Value = ClockTime> {
        (1u32..=12, 0u32..60, prop::bool::ANY)
            .prop_map(|(h, m, pm)| ClockTime::new(h, m, if pm { "PM" } else { "AM" }))
    }

    fn arb_shift() -> impl Strategy<Value = Shift> {
        (
            arb_clock_time(),
            arb_clock_time(),
            0u32..7,
            0u32..240,
            prop::bool::ANY,
        )
            .prop_map(|(start, end, day, break_minutes, before)| {
                let day = match day {
                    0 => ShiftDay::Monday,
                    1 => ShiftDay::Tuesday,
                    2 => ShiftDay::Friday,
                    3 => ShiftDay::Saturday,
                    4 => ShiftDay::Sunday,
                    _ => ShiftDay::Unspecified,
                };
                Shift::new("", day, start, end).with_break(break_minutes, before)
            })
    }

    proptest! {
        #[test]
        fn prop_minutes_conserved_when_break_fits(shift in arb_shift()) {
            let result = calculate_shift(&shift, 0, &schedule()).unwrap();
            let bucket_before_break = match result.break_bucket {
                BreakBucket::Normal => result.normal_minutes + shift.break_minutes,
                BreakBucket::Loading => result.loading_minutes + shift.break_minutes,
            };
            if bucket_before_break > shift.break_minutes {
                prop_assert_eq!(
                    result.total_minutes + shift.break_minutes,
                    result.raw_minutes
                );
            }
            prop_assert!(result.total_minutes <= result.raw_minutes);
        }

        #[test]
        fn prop_aggregate_is_idempotent(shifts in prop::collection::vec(arb_shift(), 0..8)) {
            let first = aggregate(&shifts, &schedule()).unwrap();
            let second = aggregate(&shifts, &schedule()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_aggregate_is_order_independent(shifts in prop::collection::vec(arb_shift(), 0..8)) {
            let forward = aggregate(&shifts, &schedule()).unwrap();
            let mut reversed_shifts = shifts.clone();
            reversed_shifts.reverse();
            let reversed = aggregate(&reversed_shifts, &schedule()).unwrap();

            prop_assert_eq!(forward.totals.normal_minutes, reversed.totals.normal_minutes);
            prop_assert_eq!(forward.totals.loading_minutes, reversed.totals.loading_minutes);
            let tolerance = Decimal::new(1, 18);
            prop_assert!((forward.totals.total_pay - reversed.totals.total_pay).abs() < tolerance);
        }
    }
}
