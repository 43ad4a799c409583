//! Work injury (WIBA) premium calculation.
//!
//! The premium is an employer cost reported for information only. It is
//! never subtracted from the employee's net pay; the payroll pipeline
//! keeps it out of the deduction totals.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the work injury premium calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct WorkInjuryResult {
    /// The employer-side premium.
    pub premium: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employer work injury premium on gross pay.
///
/// Assumes pre-validated (non-negative) gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_work_injury;
/// use rust_decimal::Decimal;
///
/// let result = calculate_work_injury(Decimal::from(265_000), Decimal::new(2, 3), 1);
/// assert_eq!(result.premium, Decimal::from(530));
/// ```
pub fn calculate_work_injury(
    gross_pay: Decimal,
    rate: Decimal,
    step_number: u32,
) -> WorkInjuryResult {
    let premium = gross_pay * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "work_injury".to_string(),
        rule_name: "Work Injury Premium (employer)".to_string(),
        statute_ref: "WIBA 2007 s.7".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "rate": rate.to_string()
        }),
        output: serde_json::json!({
            "premium": premium.to_string(),
            "employee_deduction": false
        }),
        reasoning: format!(
            "{} x {} = {} (employer cost, not deducted from net pay)",
            gross_pay.normalize(),
            rate.normalize(),
            premium.normalize()
        ),
    };

    WorkInjuryResult {
        premium,
        audit_step,
    }
}
