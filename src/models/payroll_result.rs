//! Payroll result models for the Statutory Payroll Engine.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs from a payroll calculation,
//! including statutory deductions, totals, and the audit trace.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::VoluntaryDeductions;

/// Statutory deductions subtracted from the employee's pay.
///
/// Each amount is a non-negative function of gross pay (and, for PAYE,
/// of taxable income). Work injury insurance is deliberately absent:
/// it is an employer cost, not an employee deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryDeductions {
    /// PAYE income tax after personal relief.
    pub paye_tax: Decimal,
    /// Health insurance contribution (tiered NHIF-style or flat SHIF-style).
    pub health_insurance: Decimal,
    /// Social security (NSSF) contribution.
    pub social_security: Decimal,
    /// Affordable housing levy.
    pub housing_levy: Decimal,
}

impl StatutoryDeductions {
    /// Returns the sum of all statutory deductions.
    pub fn total(&self) -> Decimal {
        self.paye_tax + self.health_insurance + self.social_security + self.housing_levy
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute or schedule behind this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every rule applied during the calculation for transparency.
/// Contains no clock or randomness, so identical inputs always produce
/// identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Warning code emitted when total deductions exceed gross pay.
pub(crate) const NEGATIVE_NET_PAY_WARNING: &str = "NEGATIVE_NET_PAY";

/// The complete result of a payroll calculation.
///
/// Fully determined by the [`CompensationInput`](super::CompensationInput)
/// and the rate schedule; never mutated after construction. Amounts are
/// kept unrounded internally; use [`PayrollResult::rounded`] when a
/// whole-shilling presentation value is needed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, PayrollResult, StatutoryDeductions, VoluntaryDeductions};
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     gross_pay: Decimal::from(50_000),
///     taxable_income: Decimal::from(46_200),
///     statutory: StatutoryDeductions {
///         paye_tax: Decimal::ZERO,
///         health_insurance: Decimal::ZERO,
///         social_security: Decimal::ZERO,
///         housing_levy: Decimal::ZERO,
///     },
///     work_injury_insurance: Decimal::from(100),
///     voluntary_deductions: VoluntaryDeductions::default(),
///     total_deductions: Decimal::ZERO,
///     net_pay: Decimal::from(50_000),
///     audit: AuditTrace::default(),
/// };
/// assert_eq!(result.net_pay, Decimal::from(50_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Total earnings before any deduction.
    pub gross_pay: Decimal,
    /// Income subject to PAYE after pre-tax deductions.
    pub taxable_income: Decimal,
    /// Statutory deductions applied to the employee.
    pub statutory: StatutoryDeductions,
    /// Employer-side work injury (WIBA) premium. Informational only;
    /// excluded from `total_deductions` and `net_pay`.
    pub work_injury_insurance: Decimal,
    /// The voluntary deductions applied, echoed from the input.
    pub voluntary_deductions: VoluntaryDeductions,
    /// Sum of statutory and voluntary deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions. May be negative; when it is, the
    /// audit trace carries a `NEGATIVE_NET_PAY` warning rather than the
    /// value being clamped.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit: AuditTrace,
}

impl PayrollResult {
    /// Returns true if deductions exceeded gross pay.
    pub fn has_negative_net_pay(&self) -> bool {
        self.net_pay < Decimal::ZERO
    }

    /// Returns a copy with every monetary amount rounded to whole
    /// shillings (midpoint away from zero).
    ///
    /// This is the single presentation-time rounding point; computation
    /// itself stays unrounded.
    pub fn rounded(&self) -> PayrollResult {
        fn whole(d: Decimal) -> Decimal {
            d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }

        PayrollResult {
            gross_pay: whole(self.gross_pay),
            taxable_income: whole(self.taxable_income),
            statutory: StatutoryDeductions {
                paye_tax: whole(self.statutory.paye_tax),
                health_insurance: whole(self.statutory.health_insurance),
                social_security: whole(self.statutory.social_security),
                housing_levy: whole(self.statutory.housing_levy),
            },
            work_injury_insurance: whole(self.work_injury_insurance),
            voluntary_deductions: VoluntaryDeductions {
                loan: whole(self.voluntary_deductions.loan),
                advance: whole(self.voluntary_deductions.advance),
                welfare: whole(self.voluntary_deductions.welfare),
                other: whole(self.voluntary_deductions.other),
            },
            total_deductions: whole(self.total_deductions),
            net_pay: whole(self.net_pay),
            audit: self.audit.clone(),
        }
    }
}
