//! HTTP API module for HourCalc.
//!
//! This module provides the REST endpoints for calculating a week's pay,
//! exporting it as CSV, and reading the configured rate schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ScheduleOverrides, ShiftRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
