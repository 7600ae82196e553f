//! Shift model and related types.
//!
//! This module defines the [`Shift`] record and the closed [`ShiftDay`]
//! enumeration used to pick the premium rule for a shift.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// The day a shift was worked on.
///
/// Day labels are resolved into this enum once, when the shift is built.
/// Anything that is not a full English day name becomes
/// [`ShiftDay::Unspecified`], which is paid under the weekday rule.
///
/// # Example
///
/// ```
/// use hourcalc::models::ShiftDay;
///
/// assert_eq!(ShiftDay::from_label(" Sunday "), ShiftDay::Sunday);
/// assert_eq!(ShiftDay::from_label("Shift 3"), ShiftDay::Unspecified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftDay {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// No recognisable day was given.
    #[default]
    Unspecified,
}

impl ShiftDay {
    /// Resolves a free-text label, ignoring surrounding whitespace and case.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "monday" => ShiftDay::Monday,
            "tuesday" => ShiftDay::Tuesday,
            "wednesday" => ShiftDay::Wednesday,
            "thursday" => ShiftDay::Thursday,
            "friday" => ShiftDay::Friday,
            "saturday" => ShiftDay::Saturday,
            "sunday" => ShiftDay::Sunday,
            _ => ShiftDay::Unspecified,
        }
    }

    /// Resolves the day from an explicit day field, falling back to the shift label.
    ///
    /// Older saved weeks name each shift after its day ("Monday", "Sunday")
    /// and carry no separate day field.
    pub fn resolve(day: Option<&str>, label: &str) -> Self {
        match day {
            Some(day) => Self::from_label(day),
            None => Self::from_label(label),
        }
    }
}

impl From<Weekday> for ShiftDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => ShiftDay::Monday,
            Weekday::Tue => ShiftDay::Tuesday,
            Weekday::Wed => ShiftDay::Wednesday,
            Weekday::Thu => ShiftDay::Thursday,
            Weekday::Fri => ShiftDay::Friday,
            Weekday::Sat => ShiftDay::Saturday,
            Weekday::Sun => ShiftDay::Sunday,
        }
    }
}

impl From<String> for ShiftDay {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ShiftDay> for String {
    fn from(day: ShiftDay) -> Self {
        day.to_string()
    }
}

impl fmt::Display for ShiftDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftDay::Monday => "Monday",
            ShiftDay::Tuesday => "Tuesday",
            ShiftDay::Wednesday => "Wednesday",
            ShiftDay::Thursday => "Thursday",
            ShiftDay::Friday => "Friday",
            ShiftDay::Saturday => "Saturday",
            ShiftDay::Sunday => "Sunday",
            ShiftDay::Unspecified => "Unspecified",
        };
        write!(f, "{}", name)
    }
}

fn default_true() -> bool {
    true
}

/// One worked period.
///
/// Shifts are plain input values: the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Free-text name for the shift, used to identify it in results and errors.
    #[serde(default)]
    pub label: String,
    /// The day the shift started on.
    #[serde(default)]
    pub day: ShiftDay,
    /// Clock time the shift started.
    pub start: ClockTime,
    /// Clock time the shift ended. Earlier than `start` means the next day.
    pub end: ClockTime,
    /// Unpaid break minutes to deduct.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the break was taken before the premium threshold.
    #[serde(default = "default_true")]
    pub break_before_threshold: bool,
    /// Pay this shift at the schedule's alternate base rate.
    #[serde(default)]
    pub rate_override: bool,
}

impl Shift {
    /// Creates a shift with no break and no rate override.
    pub fn new(label: impl Into<String>, day: ShiftDay, start: ClockTime, end: ClockTime) -> Self {
        Self {
            label: label.into(),
            day,
            start,
            end,
            break_minutes: 0,
            break_before_threshold: true,
            rate_override: false,
        }
    }

    /// Sets the break length and where it falls relative to the threshold.
    pub fn with_break(mut self, minutes: u32, before_threshold: bool) -> Self {
        self.break_minutes = minutes;
        self.break_before_threshold = before_threshold;
        self
    }

    /// Flags the shift for the alternate base rate.
    pub fn with_rate_override(mut self) -> Self {
        self.rate_override = true;
        self
    }

    /// Returns the name used to identify this shift, given its zero-based position.
    ///
    /// ```
    /// use hourcalc::models::{ClockTime, Shift, ShiftDay};
    ///
    /// let shift = Shift::new("", ShiftDay::Monday, ClockTime::am(9, 0), ClockTime::pm(5, 0));
    /// assert_eq!(shift.display_label(2), "Shift 3");
    /// ```
    pub fn display_label(&self, index: usize) -> String {
        if self.label.trim().is_empty() {
            format!("Shift {}", index + 1)
        } else {
            self.label.clone()
        }
    }
}
