//! Request types for the Statutory Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/payroll`
//! and `/payroll/batch` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{HealthPolicyKey, PolicySelection, SocialPolicyKey};
use crate::error::EngineResult;
use crate::models::{Allowances, CompensationInput, VoluntaryDeductions};

/// Compensation inputs in a payroll request.
///
/// Absent monetary fields default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// Basic monthly salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Named allowances.
    #[serde(default)]
    pub allowances: Allowances,
    /// Overtime hours worked this period.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Overtime pay rate per hour.
    #[serde(default)]
    pub overtime_rate: Decimal,
    /// Commission earned this period.
    #[serde(default)]
    pub commission: Decimal,
    /// Bonus paid this period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Voluntary deductions for this period.
    #[serde(default)]
    pub voluntary_deductions: VoluntaryDeductions,
}

impl From<CompensationRequest> for CompensationInput {
    fn from(request: CompensationRequest) -> Self {
        CompensationInput {
            basic_salary: request.basic_salary,
            allowances: request.allowances,
            overtime_hours: request.overtime_hours,
            overtime_rate: request.overtime_rate,
            commission: request.commission,
            bonus: request.bonus,
            voluntary_deductions: request.voluntary_deductions,
        }
    }
}

/// Policy variant overrides in a payroll request.
///
/// Keys are carried as raw strings and resolved through the policy key
/// parsers, so an unrecognized key surfaces as an `UNKNOWN_POLICY` error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyOverrides {
    /// Health insurance policy key (e.g., "tiered_schedule").
    #[serde(default)]
    pub health_insurance: Option<String>,
    /// Social security policy key (e.g., "tiered_two_band").
    #[serde(default)]
    pub social_security: Option<String>,
}

impl PolicyOverrides {
    /// Resolves the raw keys into a typed [`PolicySelection`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPolicy`](crate::error::EngineError::UnknownPolicy)
    /// when either key does not name a known policy variant.
    pub fn resolve(&self) -> EngineResult<PolicySelection> {
        Ok(PolicySelection {
            health_insurance: self
                .health_insurance
                .as_deref()
                .map(HealthPolicyKey::parse)
                .transpose()?,
            social_security: self
                .social_security
                .as_deref()
                .map(SocialPolicyKey::parse)
                .transpose()?,
        })
    }
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Identifier of the employee the calculation is for.
    pub employee_id: String,
    /// Label of the pay period (e.g., "2024-06").
    pub pay_period: String,
    /// The compensation inputs.
    pub compensation: CompensationRequest,
    /// Optional policy variant overrides.
    #[serde(default)]
    pub policies: PolicyOverrides,
}

/// One employee entry in a batch payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEmployeeRequest {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The compensation inputs.
    pub compensation: CompensationRequest,
    /// Optional per-employee policy overrides.
    #[serde(default)]
    pub policies: PolicyOverrides,
}

/// Request body for the `/payroll/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPayrollRequest {
    /// Label of the pay period shared by the whole batch.
    pub pay_period: String,
    /// The employees to compute payroll for.
    pub employees: Vec<BatchEmployeeRequest>,
}
