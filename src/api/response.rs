//! Response types for the Statutory Payroll Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::PayrollResult;

/// Success envelope for the `/payroll` endpoint.
///
/// The envelope carries the non-deterministic request metadata (id,
/// timestamp) so the wrapped [`PayrollResult`] itself stays a pure
/// function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay period label from the request.
    pub pay_period: String,
    /// The payroll calculation result.
    pub result: PayrollResult,
}

/// One entry in a batch payroll response.
///
/// Exactly one of `result` and `error` is present: a failed employee
/// carries its error without aborting the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollItem {
    /// The ID of the employee this entry is for.
    pub employee_id: String,
    /// The payroll result, when calculation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PayrollResult>,
    /// The error, when calculation failed for this employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Success envelope for the `/payroll/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollResponse {
    /// Unique identifier for this batch run.
    pub batch_id: Uuid,
    /// When the batch was processed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculations.
    pub engine_version: String,
    /// The pay period label from the request.
    pub pay_period: String,
    /// Per-employee outcomes, in request order.
    pub items: Vec<BatchPayrollItem>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("Invalid configuration in {}: {}", path, message),
                ),
            },
            EngineError::UnknownPolicy { kind, key } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_POLICY",
                    format!("Unknown {} policy: {}", kind, key),
                    "The requested policy variant is not defined in the statutory schedule",
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input field '{}': {}", field, message),
                    "All monetary amounts and hour counts must be non-negative",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
