//! Display formatting for durations and money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats minutes as hours and minutes.
///
/// ```
/// use hourcalc::export::format_duration;
///
/// assert_eq!(format_duration(540), "9h 0m");
/// assert_eq!(format_duration(95), "1h 35m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Rounds to cents, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with two decimal places.
///
/// ```
/// use hourcalc::export::format_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_money(Decimal::from_str("273.1694625").unwrap()), "$273.17");
/// assert_eq!(format_money(Decimal::from(5)), "$5.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round_currency(amount))
}
