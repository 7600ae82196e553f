//! Error types for the HourCalc pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating pay.

use thiserror::Error;

/// The main error type for the HourCalc pay engine.
///
/// # Example
///
/// ```
/// use hourcalc::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     subject: "Monday".to_string(),
///     message: "invalid start time".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input in 'Monday': invalid start time");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A 12-hour clock time was out of range or had an unknown meridiem.
    #[error("Invalid time {hour}:{minute:02} '{meridiem}'")]
    InvalidTime {
        /// The hour as given (valid range 1-12).
        hour: u32,
        /// The minute as given (valid range 0-59).
        minute: u32,
        /// The meridiem as given (valid values "AM" and "PM").
        meridiem: String,
    },

    /// A shift or schedule field failed validation. Fatal to the whole calculation.
    #[error("Invalid input in '{subject}': {message}")]
    InvalidInput {
        /// The shift label or schedule field that failed.
        subject: String,
        /// A description of what was wrong.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The saved week state could not be written.
    #[error("Failed to save week state to '{path}': {message}")]
    PersistenceError {
        /// The snapshot path.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_displays_components() {
        let error = EngineError::InvalidTime {
            hour: 13,
            minute: 5,
            meridiem: "PM".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time 13:05 'PM'");
    }

    #[test]
    fn test_invalid_input_displays_subject_and_message() {
        let error = EngineError::InvalidInput {
            subject: "Shift 2".to_string(),
            message: "invalid end time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input in 'Shift 2': invalid end time"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/schedule.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schedule.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_persistence_error_displays_path_and_message() {
        let error = EngineError::PersistenceError {
            path: "/ro/week.json".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to save week state to '/ro/week.json': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                subject: "premium threshold".to_string(),
                message: "hour out of range".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
