//! HTTP API module for the Statutory Payroll Engine.
//!
//! This module provides the REST API endpoints for computing payroll
//! for single employees and for batch runs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BatchEmployeeRequest, BatchPayrollRequest, CompensationRequest, PayrollRequest,
    PolicyOverrides,
};
pub use response::{ApiError, BatchPayrollItem, BatchPayrollResponse, PayrollResponse};
pub use state::AppState;
