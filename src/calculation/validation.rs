//! Boundary validation for compensation inputs.
//!
//! Validation happens once at the entry to
//! [`compute_payroll`](super::compute_payroll); the individual calculation
//! rules assume pre-validated input and never re-validate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationInput;

/// Validates that every monetary field and hour count is non-negative.
///
/// Fails fast on the first negative field with an [`EngineError::InvalidInput`]
/// naming the offending field; no partial result is produced.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_compensation;
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let mut input = CompensationInput::default();
/// assert!(validate_compensation(&input).is_ok());
///
/// input.basic_salary = Decimal::from(-1);
/// assert!(validate_compensation(&input).is_err());
/// ```
pub fn validate_compensation(input: &CompensationInput) -> EngineResult<()> {
    let fields: [(&str, Decimal); 13] = [
        ("basic_salary", input.basic_salary),
        ("allowances.house", input.allowances.house),
        ("allowances.transport", input.allowances.transport),
        ("allowances.medical", input.allowances.medical),
        ("allowances.other", input.allowances.other),
        ("overtime_hours", input.overtime_hours),
        ("overtime_rate", input.overtime_rate),
        ("commission", input.commission),
        ("bonus", input.bonus),
        ("voluntary_deductions.loan", input.voluntary_deductions.loan),
        (
            "voluntary_deductions.advance",
            input.voluntary_deductions.advance,
        ),
        (
            "voluntary_deductions.welfare",
            input.voluntary_deductions.welfare,
        ),
        (
            "voluntary_deductions.other",
            input.voluntary_deductions.other,
        ),
    ];

    for (field, value) in fields {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allowances, VoluntaryDeductions};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_input_is_valid() {
        assert!(validate_compensation(&CompensationInput::default()).is_ok());
    }

    #[test]
    fn test_fully_populated_input_is_valid() {
        let input = CompensationInput {
            basic_salary: dec("180000"),
            allowances: Allowances {
                house: dec("30000"),
                transport: dec("15000"),
                medical: dec("5000"),
                other: dec("10000"),
            },
            overtime_hours: dec("10"),
            overtime_rate: dec("500"),
            commission: dec("8000"),
            bonus: dec("12000"),
            voluntary_deductions: VoluntaryDeductions {
                loan: dec("5000"),
                advance: dec("2000"),
                welfare: dec("1000"),
                other: dec("500"),
            },
        };
        assert!(validate_compensation(&input).is_ok());
    }

    #[test]
    fn test_negative_basic_salary_names_field() {
        let input = CompensationInput {
            basic_salary: dec("-1000"),
            ..Default::default()
        };
        match validate_compensation(&input).unwrap_err() {
            EngineError::InvalidInput { field, message } => {
                assert_eq!(field, "basic_salary");
                assert!(message.contains("-1000"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_overtime_hours_is_rejected() {
        let input = CompensationInput {
            overtime_hours: dec("-0.5"),
            ..Default::default()
        };
        match validate_compensation(&input).unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "overtime_hours");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_allowance_is_rejected() {
        let input = CompensationInput {
            allowances: Allowances {
                medical: dec("-1"),
                ..Default::default()
            },
            ..Default::default()
        };
        match validate_compensation(&input).unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "allowances.medical");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_voluntary_deduction_is_rejected() {
        let input = CompensationInput {
            voluntary_deductions: VoluntaryDeductions {
                other: dec("-10"),
                ..Default::default()
            },
            ..Default::default()
        };
        match validate_compensation(&input).unwrap_err() {
            EngineError::InvalidInput { field, .. } => {
                assert_eq!(field, "voluntary_deductions.other");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_values_are_valid() {
        let input = CompensationInput {
            basic_salary: Decimal::ZERO,
            ..Default::default()
        };
        assert!(validate_compensation(&input).is_ok());
    }
}
