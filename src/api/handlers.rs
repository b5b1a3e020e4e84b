//! HTTP request handlers for the Weekly Wage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ENGINE_VERSION, calculate_week};
use crate::error::{EngineError, INVALID_SURCHARGE_MESSAGE};
use crate::models::WeekCalculation;
use crate::report::render_report;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to a `400` response.
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
            } else if body_text.contains(INVALID_SURCHARGE_MESSAGE) {
                ApiError::new("INVALID_SURCHARGE", body_text)
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

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Validates the request and runs the week calculation.
fn perform_calculation(request: CalculationRequest) -> Result<WeekCalculation, EngineError> {
    let (entries, period) = request.into_domain()?;
    calculate_week(&entries, period)
}

/// Parses the payload and performs the calculation, logging the outcome.
fn handle_calculation(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<WeekCalculation, Response> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return Err(rejection_response(rejection, correlation_id)),
    };

    let days_count = request.days.len();
    match perform_calculation(request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                days_count,
                total_pay = %result.summary.total_pay,
                total_time = %result.summary.total_minutes_display,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            Ok(result)
        }
        Err(err) => Err(engine_error_response(err, correlation_id)),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a week of day entries and returns the calculated [`WeekCalculation`].
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    match handle_calculation(payload, correlation_id) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /report endpoint.
///
/// Accepts the same body as `/calculate` and returns the plain-text report.
async fn report_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    match handle_calculation(payload, correlation_id) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_report(&result),
        )
            .into_response(),
        Err(response) => response,
    }
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "name": state.config().engine_name(),
        "version": ENGINE_VERSION
    }))
}
