//! HTTP request handlers for the Statutory Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll;
use crate::models::CompensationInput;

use super::request::{BatchPayrollRequest, PayrollRequest};
use super::response::{
    ApiError, ApiErrorResponse, BatchPayrollItem, BatchPayrollResponse, PayrollResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/payroll/batch", post(batch_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /payroll.
///
/// Computes payroll for one employee and returns the result in an
/// envelope carrying the calculation id and timestamp.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = match request
        .policies
        .resolve()
        .and_then(|selection| state.config().payroll_config(&selection))
    {
        Ok(config) => config,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Policy resolution failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let input: CompensationInput = request.compensation.into();
    let start_time = Instant::now();
    match compute_payroll(&input, &config) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed"
            );
            let response = PayrollResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id: request.employee_id,
                pay_period: request.pay_period,
                result,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                error = %err,
                "Payroll calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /payroll/batch.
///
/// Computes payroll for every employee in the batch. A failure for one
/// employee is recorded in that employee's item and never aborts the
/// rest of the run; the response is always 200 once the body parses.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchPayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        pay_period = %request.pay_period,
        employees = request.employees.len(),
        "Processing batch payroll request"
    );

    let start_time = Instant::now();
    let mut items = Vec::with_capacity(request.employees.len());
    let mut failures: usize = 0;

    for employee in request.employees {
        let outcome = employee
            .policies
            .resolve()
            .and_then(|selection| state.config().payroll_config(&selection))
            .and_then(|config| {
                let input: CompensationInput = employee.compensation.into();
                compute_payroll(&input, &config)
            });

        match outcome {
            Ok(result) => items.push(BatchPayrollItem {
                employee_id: employee.employee_id,
                result: Some(result),
                error: None,
            }),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %employee.employee_id,
                    error = %err,
                    "Batch item failed"
                );
                failures += 1;
                let api_error: ApiErrorResponse = err.into();
                items.push(BatchPayrollItem {
                    employee_id: employee.employee_id,
                    result: None,
                    error: Some(api_error.error),
                });
            }
        }
    }

    info!(
        correlation_id = %correlation_id,
        items = items.len(),
        failures,
        duration_us = start_time.elapsed().as_micros(),
        "Batch payroll completed"
    );

    let response = BatchPayrollResponse {
        batch_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pay_period: request.pay_period,
        items,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
