//! Affordable housing levy calculation.
//!
//! A flat percentage of gross pay with no cap and no floor.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the housing levy calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct HousingLevyResult {
    /// The housing levy contribution.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the housing levy on gross pay.
///
/// Assumes pre-validated (non-negative) gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_housing_levy;
/// use rust_decimal::Decimal;
///
/// let result = calculate_housing_levy(Decimal::from(100_000), Decimal::new(15, 3), 1);
/// assert_eq!(result.contribution, Decimal::from(1_500));
/// ```
pub fn calculate_housing_levy(
    gross_pay: Decimal,
    rate: Decimal,
    step_number: u32,
) -> HousingLevyResult {
    let contribution = gross_pay * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_levy".to_string(),
        rule_name: "Affordable Housing Levy".to_string(),
        statute_ref: "Affordable Housing Act 2024 s.4".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "rate": rate.to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            gross_pay.normalize(),
            rate.normalize(),
            contribution.normalize()
        ),
    };

    HousingLevyResult {
        contribution,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// HL-001: exactly 1.5% of gross pay
    #[test]
    fn test_levy_is_exact_percentage() {
        let result = calculate_housing_levy(dec("265000"), dec("0.015"), 1);
        assert_eq!(result.contribution, dec("3975"));
    }

    /// HL-002: zero gross yields zero levy
    #[test]
    fn test_levy_of_zero_gross() {
        let result = calculate_housing_levy(Decimal::ZERO, dec("0.015"), 1);
        assert_eq!(result.contribution, Decimal::ZERO);
    }

    /// HL-003: no cap on large gross pay
    #[test]
    fn test_levy_has_no_cap() {
        let result = calculate_housing_levy(dec("10000000"), dec("0.015"), 1);
        assert_eq!(result.contribution, dec("150000"));
    }

    /// HL-004: fractional gross pay stays unrounded
    #[test]
    fn test_levy_stays_unrounded() {
        let result = calculate_housing_levy(dec("33333"), dec("0.015"), 1);
        assert_eq!(result.contribution, dec("499.995"));
    }

    #[test]
    fn test_audit_step_records_rate() {
        let result = calculate_housing_levy(dec("100000"), dec("0.015"), 6);
        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "housing_levy");
        assert_eq!(result.audit_step.input["rate"].as_str().unwrap(), "0.015");
    }
}
