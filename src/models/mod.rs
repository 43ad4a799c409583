//! Domain models for the Statutory Payroll Engine.

mod compensation;
mod payroll_result;

pub use compensation::{Allowances, CompensationInput, VoluntaryDeductions};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, PayrollResult, StatutoryDeductions,
};
pub(crate) use payroll_result::NEGATIVE_NET_PAY_WARNING;
