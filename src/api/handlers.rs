//! HTTP request handlers for the HourCalc API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::aggregate;
use crate::error::EngineResult;
use crate::export::{export_csv, export_file_name};
use crate::models::{Shift, WeekCalculation};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export/csv", post(export_csv_handler))
        .route("/schedule", get(schedule_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn error_response(err: ApiErrorResponse) -> Response {
    (
        err.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(err.error),
    )
        .into_response()
}

/// Applies schedule overrides and runs the weekly calculation.
fn perform_calculation(
    state: &AppState,
    request: CalculationRequest,
) -> EngineResult<WeekCalculation> {
    let schedule = match &request.schedule {
        Some(overrides) => overrides.apply(state.schedule())?,
        None => state.schedule().clone(),
    };
    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();
    aggregate(&shifts, &schedule)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a week of shifts and returns per-shift results and totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let shifts_count = request.shifts.len();
    let start_time = Instant::now();
    match perform_calculation(&state, request) {
        Ok(week) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count,
                total_pay = %week.totals.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::new(correlation_id, week)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /export/csv endpoint.
///
/// Runs the same calculation as `/calculate` and returns it as a CSV
/// attachment.
async fn export_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let week_label = request.week_label.clone();
    match perform_calculation(&state, request) {
        Ok(week) => {
            let file_name = export_file_name(&week_label);
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                shifts_count = week.shifts.len(),
                "CSV export completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                export_csv(&week, &week_label),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "CSV export failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /schedule endpoint.
async fn schedule_handler(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.schedule().clone())).into_response()
}
