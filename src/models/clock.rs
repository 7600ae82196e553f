//! 12-hour clock time input.
//!
//! Times arrive from the caller exactly as entered on a 12-hour clock and are
//! only validated when normalized, so that a bad value can be reported
//! against the shift it belongs to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Morning or afternoon half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    /// Midnight up to (not including) noon.
    #[serde(rename = "AM")]
    Am,
    /// Noon up to (not including) midnight.
    #[serde(rename = "PM")]
    Pm,
}

impl FromStr for Meridiem {
    type Err = ();

    /// Parses "AM" or "PM" in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A clock time as entered: hour 1-12, minute 0-59 and a meridiem string.
///
/// No validation happens on construction or deserialization.
///
/// # Example
///
/// ```
/// use hourcalc::models::ClockTime;
///
/// let time = ClockTime::pm(6, 30);
/// assert_eq!(time.to_string(), "6:30 PM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// The hour, valid from 1 to 12.
    pub hour: u32,
    /// The minute, valid from 0 to 59.
    pub minute: u32,
    /// "AM" or "PM", case-insensitive.
    pub meridiem: String,
}

impl ClockTime {
    /// Creates a clock time from raw parts.
    pub fn new(hour: u32, minute: u32, meridiem: impl Into<String>) -> Self {
        Self {
            hour,
            minute,
            meridiem: meridiem.into(),
        }
    }

    /// Creates a morning clock time.
    pub fn am(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute, "AM")
    }

    /// Creates an afternoon clock time.
    pub fn pm(hour: u32, minute: u32) -> Self {
        Self::new(hour, minute, "PM")
    }

    /// Converts minutes since midnight back to a 12-hour clock time.
    ///
    /// Values of a full day or more wrap around.
    ///
    /// ```
    /// use hourcalc::models::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_minutes(0), ClockTime::am(12, 0));
    /// assert_eq!(ClockTime::from_minutes(1110), ClockTime::pm(6, 30));
    /// ```
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % (24 * 60);
        let hour24 = minutes / 60;
        let minute = minutes % 60;
        let meridiem = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self::new(hour, minute, meridiem.to_string())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}
