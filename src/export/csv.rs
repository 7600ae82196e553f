//! Row-based CSV export of a weekly calculation.

use rust_decimal::Decimal;

use crate::models::WeekCalculation;

/// Longest label fragment kept in an export file name.
const MAX_FILE_LABEL_LEN: usize = 40;

fn decimal_field(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Quotes a field if it contains a quote, comma or newline.
fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders a calculation as CSV.
///
/// Layout: rate summary rows, a blank row, one row per shift under a
/// header, a blank row, then the totals and pay rows. Amounts are written
/// unrounded.
///
/// # Example
///
/// ```
/// use hourcalc::calculation::aggregate;
/// use hourcalc::export::export_csv;
/// use hourcalc::models::{ClockTime, RateSchedule, Shift, ShiftDay};
///
/// let monday = Shift::new("Monday", ShiftDay::Monday, ClockTime::am(9, 0), ClockTime::pm(5, 0));
/// let shifts = vec![monday];
/// let week = aggregate(&shifts, &RateSchedule::default()).unwrap();
///
/// let csv = export_csv(&week, "Week 1");
/// assert!(csv.starts_with("WeekLabel,Week 1\n"));
/// assert!(csv.contains("\nMonday,480,0,480,0\n"));
/// ```
pub fn export_csv(week: &WeekCalculation, week_label: &str) -> String {
    let mut rows: Vec<Vec<String>> = vec![
        vec!["WeekLabel".to_string(), week_label.trim().to_string()],
        vec!["BaseRate".to_string(), decimal_field(week.rates.base_rate)],
        vec![
            "LoadingRateWeekday_25pct".to_string(),
            decimal_field(week.rates.weekday_loading_rate),
        ],
        vec![
            "LoadingRateSunday_50pct".to_string(),
            decimal_field(week.rates.sunday_loading_rate),
        ],
        vec![],
        ["ShiftName", "NormalMins", "LoadingMins", "TotalMins", "BreakMins"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    ];

    for shift in &week.shifts {
        rows.push(vec![
            shift.label.clone(),
            shift.normal_minutes.to_string(),
            shift.loading_minutes.to_string(),
            shift.total_minutes.to_string(),
            shift.break_minutes.to_string(),
        ]);
    }

    let totals = &week.totals;
    rows.push(vec![]);
    rows.push(vec![
        "Totals".to_string(),
        totals.normal_minutes.to_string(),
        totals.loading_minutes.to_string(),
        totals.total_minutes.to_string(),
        String::new(),
    ]);
    rows.push(vec!["PayNormal".to_string(), decimal_field(totals.normal_pay)]);
    rows.push(vec!["PayLoading".to_string(), decimal_field(totals.loading_pay)]);
    rows.push(vec!["PayTotal".to_string(), decimal_field(totals.total_pay)]);

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the download file name for a week's export.
///
/// ```
/// use hourcalc::export::export_file_name;
///
/// assert_eq!(export_file_name(" March wk 2 "), "HourCalc_March_wk_2.csv");
/// assert_eq!(export_file_name(""), "HourCalc_week.csv");
/// ```
pub fn export_file_name(week_label: &str) -> String {
    let mut safe = String::new();
    let mut in_run = false;
    for c in week_label.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            safe.push(c);
            in_run = false;
        } else if !in_run {
            safe.push('_');
            in_run = true;
        }
    }

    let safe: String = safe.chars().take(MAX_FILE_LABEL_LEN).collect();
    if safe.is_empty() {
        "HourCalc_week.csv".to_string()
    } else {
        format!("HourCalc_{}.csv", safe)
    }
}
