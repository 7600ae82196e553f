//! Configuration loading for the HourCalc pay engine.
//!
//! This module loads the [`crate::models::RateSchedule`] from a YAML file:
//! base rate, optional alternate rate, weekday premium threshold and the
//! loading percentage for each day category.
//!
//! # Example
//!
//! ```no_run
//! use hourcalc::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Threshold: {} minutes past midnight", config.schedule().premium_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LoadingConfig, ScheduleConfig};
