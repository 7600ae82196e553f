//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the rate
//! schedule from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::RateSchedule;

use super::types::ScheduleConfig;

/// Loads and provides access to the configured rate schedule.
///
/// # Example
///
/// ```no_run
/// use hourcalc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("Base rate: ${}", loader.schedule().base_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: RateSchedule,
}

impl ConfigLoader {
    /// Loads the schedule from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The premium threshold is not a valid clock time (`InvalidInput`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        info!(
            path = %path_str,
            base_rate = %loader.schedule.base_rate,
            premium_threshold = loader.schedule.premium_threshold,
            "Loaded rate schedule"
        );
        Ok(loader)
    }

    /// Parses a schedule from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let config: ScheduleConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            schedule: config.into_schedule()?,
        })
    }

    /// Wraps an already-built schedule.
    pub fn from_schedule(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// Returns the configured rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_schedule(RateSchedule::default())
    }
}
