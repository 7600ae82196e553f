//! Application state for the HourCalc API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::RateSchedule;

/// Shared application state.
///
/// Requests may override parts of the configured schedule but never
/// change the shared copy.
#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RateSchedule>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            schedule: Arc::new(config.schedule().clone()),
        }
    }

    /// Returns the configured rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}
