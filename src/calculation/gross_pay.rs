//! Gross pay calculation.
//!
//! Gross pay is the plain sum of all earning components: no caps and no
//! mid-calculation rounding.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationInput};

/// The result of the gross pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossPayResult {
    /// Total earnings before any deduction.
    pub gross_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates gross pay from raw compensation inputs.
///
/// ```text
/// gross = basic + house + transport + medical + other
///       + overtime_hours * overtime_rate + commission + bonus
/// ```
///
/// Assumes pre-validated (non-negative) input.
///
/// # Arguments
///
/// * `input` - The validated compensation input
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     basic_salary: Decimal::from(50_000),
///     ..Default::default()
/// };
/// let result = calculate_gross_pay(&input, 1);
/// assert_eq!(result.gross_pay, Decimal::from(50_000));
/// ```
pub fn calculate_gross_pay(input: &CompensationInput, step_number: u32) -> GrossPayResult {
    let overtime_pay = input.overtime_hours * input.overtime_rate;
    let allowances_total = input.allowances.total();
    let gross_pay =
        input.basic_salary + allowances_total + overtime_pay + input.commission + input.bonus;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        statute_ref: "Employment Act 2007 s.35".to_string(),
        input: serde_json::json!({
            "basic_salary": input.basic_salary.to_string(),
            "allowances_total": allowances_total.to_string(),
            "overtime_hours": input.overtime_hours.to_string(),
            "overtime_rate": input.overtime_rate.to_string(),
            "commission": input.commission.to_string(),
            "bonus": input.bonus.to_string()
        }),
        output: serde_json::json!({
            "overtime_pay": overtime_pay.to_string(),
            "gross_pay": gross_pay.to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} + {} = {}",
            input.basic_salary.normalize(),
            allowances_total.normalize(),
            overtime_pay.normalize(),
            input.commission.normalize(),
            input.bonus.normalize(),
            gross_pay.normalize()
        ),
    };

    GrossPayResult {
        gross_pay,
        audit_step,
    }
}
