//! Saved week state.
//!
//! The week the user is editing is kept as a JSON snapshot. Loading is
//! lenient: anything missing or malformed in the snapshot falls back to its
//! default value instead of failing.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::calculation::normalize_clock_time;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ClockTime, DEFAULT_BASE_RATE, DEFAULT_PREMIUM_THRESHOLD, RateSchedule, Shift, ShiftDay,
};

fn default_start() -> ClockTime {
    ClockTime::am(9, 0)
}

fn default_end() -> ClockTime {
    ClockTime::pm(5, 0)
}

/// The shift a fresh week starts with.
fn first_shift() -> Shift {
    Shift::new("Monday", ShiftDay::Monday, default_start(), default_end())
}

/// Everything needed to restore the user's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekState {
    /// Free-text label for the week.
    pub week_label: String,
    /// Base hourly rate entered by the user.
    pub base_rate: Decimal,
    /// Weekday premium threshold entered by the user.
    pub premium_threshold: ClockTime,
    /// The week's shifts, in entry order.
    pub shifts: Vec<Shift>,
}

impl Default for WeekState {
    fn default() -> Self {
        Self {
            week_label: String::new(),
            base_rate: DEFAULT_BASE_RATE,
            premium_threshold: ClockTime::from_minutes(DEFAULT_PREMIUM_THRESHOLD),
            shifts: vec![first_shift()],
        }
    }
}

impl WeekState {
    /// Loads a snapshot, defaulting whatever is missing or invalid.
    ///
    /// Never fails: an unreadable or unparseable file yields
    /// [`WeekState::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "No saved week, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(fields)) => Self::from_fields(&fields),
            Ok(_) => {
                warn!(path = %path.display(), "Saved week is not an object, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "Saved week is corrupt, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let persistence_error = |message: String| EngineError::PersistenceError {
            path: path.display().to_string(),
            message,
        };

        let json =
            serde_json::to_string_pretty(self).map_err(|e| persistence_error(e.to_string()))?;
        fs::write(path, json).map_err(|e| persistence_error(e.to_string()))?;

        debug!(path = %path.display(), shifts = self.shifts.len(), "Saved week");
        Ok(())
    }

    /// Rebuilds a week from a parsed JSON object, field by field.
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let defaults = Self::default();

        let week_label = fields
            .get("week_label")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(defaults.week_label);

        let base_rate = fields
            .get("base_rate")
            .and_then(|v| serde_json::from_value::<Decimal>(v.clone()).ok())
            .unwrap_or(defaults.base_rate);

        let premium_threshold =
            clock_field(fields.get("premium_threshold"), defaults.premium_threshold);

        let shifts: Vec<Shift> = fields
            .get("shifts")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| shift_from_value(item, index))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            week_label,
            base_rate,
            premium_threshold,
            shifts: if shifts.is_empty() { defaults.shifts } else { shifts },
        }
    }

    /// Builds the schedule to calculate this week with.
    ///
    /// The stored base rate and threshold replace those in `base`; the
    /// loadings and alternate rate come from `base`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the stored threshold is not a
    /// valid clock time.
    pub fn schedule(&self, base: &RateSchedule) -> EngineResult<RateSchedule> {
        let threshold = normalize_clock_time(&self.premium_threshold).map_err(|err| {
            EngineError::InvalidInput {
                subject: "premium threshold".to_string(),
                message: err.to_string(),
            }
        })?;

        Ok(base
            .clone()
            .with_base_rate(self.base_rate)
            .with_premium_threshold(threshold))
    }

    /// Appends a default 9:00 AM - 5:00 PM shift named after its position.
    pub fn add_shift(&mut self) {
        let label = format!("Shift {}", self.shifts.len() + 1);
        self.shifts.push(Shift::new(
            label,
            ShiftDay::Unspecified,
            default_start(),
            default_end(),
        ));
    }

    /// Removes the shift at `index`, keeping at least one shift in the week.
    ///
    /// Returns the removed shift, or `None` if `index` is out of range.
    pub fn remove_shift(&mut self, index: usize) -> Option<Shift> {
        if index >= self.shifts.len() {
            return None;
        }
        let removed = self.shifts.remove(index);
        if self.shifts.is_empty() {
            self.shifts.push(first_shift());
        }
        Some(removed)
    }

    /// Restores the default week.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Reads a clock time object, defaulting each part separately.
fn clock_field(value: Option<&Value>, default: ClockTime) -> ClockTime {
    let Some(fields) = value.and_then(Value::as_object) else {
        return default;
    };

    let number = |key: &str, fallback: u32| {
        fields
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(fallback)
    };

    ClockTime {
        hour: number("hour", default.hour),
        minute: number("minute", default.minute),
        meridiem: fields
            .get("meridiem")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(default.meridiem),
    }
}

/// Reads a yes/no flag stored either as a boolean or as "yes"/"no".
fn flag_field(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => match text.trim().to_lowercase().as_str() {
            "yes" => true,
            "no" => false,
            _ => default,
        },
        _ => default,
    }
}

fn shift_from_value(value: &Value, index: usize) -> Shift {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    let label = fields
        .get("label")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Shift {}", index + 1));

    let day = ShiftDay::resolve(fields.get("day").and_then(Value::as_str), &label);

    // Negative or fractional breaks from older snapshots clamp to whole minutes >= 0.
    let break_minutes = fields
        .get("break_minutes")
        .and_then(Value::as_f64)
        .map(|minutes| minutes.max(0.0).min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0);

    Shift {
        day,
        start: clock_field(fields.get("start"), default_start()),
        end: clock_field(fields.get("end"), default_end()),
        break_minutes,
        break_before_threshold: flag_field(fields.get("break_before_threshold"), true),
        rate_override: flag_field(fields.get("rate_override"), false),
        label,
    }
}
