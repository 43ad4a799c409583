//! Compensation input models.
//!
//! This module defines the [`CompensationInput`] struct and its named
//! allowance and voluntary deduction groupings for a single employee in a
//! single pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Named monthly allowances paid on top of basic salary.
///
/// Absent fields deserialize to zero so callers never null-propagate
/// into the gross pay sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowances {
    /// House allowance.
    #[serde(default)]
    pub house: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical: Decimal,
    /// Any other allowances, combined.
    #[serde(default)]
    pub other: Decimal,
}

impl Allowances {
    /// Returns the sum of all allowances.
    pub fn total(&self) -> Decimal {
        self.house + self.transport + self.medical + self.other
    }
}

/// Named voluntary deductions agreed between employer and employee.
///
/// These are subtracted from net pay but are not statutory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryDeductions {
    /// Loan repayment.
    #[serde(default)]
    pub loan: Decimal,
    /// Salary advance recovery.
    #[serde(default)]
    pub advance: Decimal,
    /// Staff welfare contribution.
    #[serde(default)]
    pub welfare: Decimal,
    /// Any other deductions, combined.
    #[serde(default)]
    pub other: Decimal,
}

impl VoluntaryDeductions {
    /// Returns the sum of all voluntary deductions.
    pub fn total(&self) -> Decimal {
        self.loan + self.advance + self.welfare + self.other
    }
}

/// Raw compensation inputs for one employee in one pay period.
///
/// All monetary fields must be non-negative; validation happens once at
/// the boundary of [`compute_payroll`](crate::calculation::compute_payroll).
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     basic_salary: Decimal::from(50_000),
///     ..Default::default()
/// };
/// assert_eq!(input.allowances.total(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
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
