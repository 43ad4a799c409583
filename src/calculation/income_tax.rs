//! Progressive PAYE income tax calculation.
//!
//! Tax is computed by classic bracket integration: each marginal rate
//! applies only to the portion of taxable income falling within its band.
//! Personal relief is subtracted after bracket integration and the result
//! is floored at zero.

use rust_decimal::Decimal;

use crate::config::TaxConfig;
use crate::models::AuditStep;

/// The result of the PAYE calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// PAYE tax after personal relief, never negative.
    pub tax: Decimal,
    /// Bracket tax before personal relief.
    pub gross_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives taxable income from gross pay and the pre-tax deduction set.
///
/// Which statutory contributions are deducted before the bracket table is
/// applied is a schedule configuration choice (`deduct_social_security`,
/// `deduct_housing_levy` in tax.yaml); the engine never hardcodes one
/// interpretation.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_taxable_income;
/// use payroll_engine::config::{TaxBracket, TaxConfig};
/// use rust_decimal::Decimal;
///
/// let config = TaxConfig {
///     brackets: vec![TaxBracket { upper_bound: None, rate: Decimal::new(10, 2) }],
///     personal_relief: Decimal::ZERO,
///     deduct_social_security: true,
///     deduct_housing_levy: false,
/// };
/// let taxable = calculate_taxable_income(
///     Decimal::from(50_000),
///     Decimal::from(2_160),
///     Decimal::from(750),
///     &config,
/// );
/// assert_eq!(taxable, Decimal::from(47_840));
/// ```
pub fn calculate_taxable_income(
    gross_pay: Decimal,
    social_security: Decimal,
    housing_levy: Decimal,
    config: &TaxConfig,
) -> Decimal {
    let mut taxable = gross_pay;
    if config.deduct_social_security {
        taxable -= social_security;
    }
    if config.deduct_housing_levy {
        taxable -= housing_levy;
    }
    taxable
}

/// Calculates PAYE income tax on taxable income.
///
/// Sums, for each band up to and including the band containing the
/// taxable income, the portion of income falling in that band times that
/// band's marginal rate, then subtracts the personal relief and floors
/// at zero. Taxable income at or below zero yields zero tax.
///
/// # Arguments
///
/// * `taxable_income` - Gross pay minus the configured pre-tax deductions
/// * `config` - The PAYE bracket table and relief (validated at load)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Statute Reference
///
/// Income Tax Act, Third Schedule, Head B (monthly individual rates).
pub fn calculate_income_tax(
    taxable_income: Decimal,
    config: &TaxConfig,
    step_number: u32,
) -> IncomeTaxResult {
    let mut gross_tax = Decimal::ZERO;

    if taxable_income > Decimal::ZERO {
        let mut lower = Decimal::ZERO;
        for bracket in &config.brackets {
            let portion = match bracket.upper_bound {
                Some(upper) => taxable_income.min(upper) - lower,
                None => taxable_income - lower,
            };
            if portion <= Decimal::ZERO {
                break;
            }
            gross_tax += portion * bracket.rate;
            match bracket.upper_bound {
                Some(upper) if taxable_income > upper => lower = upper,
                _ => break,
            }
        }
    }

    let tax = (gross_tax - config.personal_relief).max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "paye_tax".to_string(),
        rule_name: "PAYE Income Tax".to_string(),
        statute_ref: "ITA 3rd Sch Head B".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.to_string(),
            "personal_relief": config.personal_relief.to_string(),
            "bracket_count": config.brackets.len()
        }),
        output: serde_json::json!({
            "gross_tax": gross_tax.to_string(),
            "tax": tax.to_string()
        }),
        reasoning: format!(
            "Bracket tax {} on taxable income {}, less relief {} = {}",
            gross_tax.normalize(),
            taxable_income.normalize(),
            config.personal_relief.normalize(),
            tax.normalize()
        ),
    };

    IncomeTaxResult {
        tax,
        gross_tax,
        audit_step,
    }
}
