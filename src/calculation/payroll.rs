//! The complete payroll calculation pipeline.
//!
//! [`compute_payroll`] wires the individual rules together: validate
//! once at the boundary, derive gross pay, apply each statutory
//! deduction, derive taxable income and PAYE, then total everything
//! into a [`PayrollResult`] with a full audit trace.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationInput, NEGATIVE_NET_PAY_WARNING,
    PayrollResult, StatutoryDeductions,
};

use super::{
    calculate_gross_pay, calculate_health_insurance, calculate_housing_levy,
    calculate_income_tax, calculate_social_security, calculate_taxable_income,
    calculate_work_injury, validate_compensation,
};

/// Computes a complete payroll result for one employee and one period.
///
/// The calculation is pure and deterministic: identical input and
/// configuration always produce an identical result, so batch callers
/// may fan invocations out across threads freely.
///
/// Net pay is allowed to go negative when deductions exceed gross pay;
/// instead of being clamped, the condition is surfaced as a
/// `NEGATIVE_NET_PAY` warning in the audit trace. The employer-side work
/// injury premium is reported but excluded from the net pay subtraction.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
/// for any negative monetary field or hour count; no partial result is
/// produced.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::compute_payroll;
/// use payroll_engine::config::{ConfigLoader, PolicySelection};
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ke-2024")?;
/// let config = loader.payroll_config(&PolicySelection::default())?;
/// let input = CompensationInput {
///     basic_salary: Decimal::from(50_000),
///     ..Default::default()
/// };
/// let result = compute_payroll(&input, &config)?;
/// assert_eq!(result.gross_pay, Decimal::from(50_000));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn compute_payroll(
    input: &CompensationInput,
    config: &PayrollConfig,
) -> EngineResult<PayrollResult> {
    validate_compensation(input)?;

    let mut steps: Vec<AuditStep> = Vec::with_capacity(8);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let gross = calculate_gross_pay(input, step_number);
    steps.push(gross.audit_step);
    step_number += 1;
    let gross_pay = gross.gross_pay;

    let health = calculate_health_insurance(gross_pay, &config.health_insurance, step_number);
    steps.push(health.audit_step);
    step_number += 1;

    let social = calculate_social_security(gross_pay, &config.social_security, step_number);
    steps.push(social.audit_step);
    step_number += 1;

    let levy = calculate_housing_levy(gross_pay, config.housing_levy_rate, step_number);
    steps.push(levy.audit_step);
    step_number += 1;

    let work_injury = calculate_work_injury(gross_pay, config.work_injury_rate, step_number);
    steps.push(work_injury.audit_step);
    step_number += 1;

    let taxable_income = calculate_taxable_income(
        gross_pay,
        social.contribution,
        levy.contribution,
        &config.tax,
    );
    steps.push(AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        statute_ref: "ITA s.5".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "deduct_social_security": config.tax.deduct_social_security,
            "deduct_housing_levy": config.tax.deduct_housing_levy,
            "social_security": social.contribution.to_string(),
            "housing_levy": levy.contribution.to_string()
        }),
        output: serde_json::json!({
            "taxable_income": taxable_income.to_string()
        }),
        reasoning: format!(
            "Gross {} less configured pre-tax deductions = {}",
            gross_pay.normalize(),
            taxable_income.normalize()
        ),
    });
    step_number += 1;

    let tax = calculate_income_tax(taxable_income, &config.tax, step_number);
    steps.push(tax.audit_step);
    step_number += 1;

    let statutory = StatutoryDeductions {
        paye_tax: tax.tax,
        health_insurance: health.contribution,
        social_security: social.contribution,
        housing_levy: levy.contribution,
    };
    let voluntary_total = input.voluntary_deductions.total();
    let total_deductions = statutory.total() + voluntary_total;
    let net_pay = gross_pay - total_deductions;

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        statute_ref: "Employment Act 2007 s.19".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "statutory_total": statutory.total().to_string(),
            "voluntary_total": voluntary_total.to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!(
            "{} - {} = {}",
            gross_pay.normalize(),
            total_deductions.normalize(),
            net_pay.normalize()
        ),
    });

    if net_pay < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_PAY_WARNING.to_string(),
            message: format!(
                "Total deductions {} exceed gross pay {}; net pay is {}",
                total_deductions.normalize(),
                gross_pay.normalize(),
                net_pay.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    Ok(PayrollResult {
        gross_pay,
        taxable_income,
        statutory,
        work_injury_insurance: work_injury.premium,
        voluntary_deductions: input.voluntary_deductions.clone(),
        total_deductions,
        net_pay,
        audit: AuditTrace { steps, warnings },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FlatCappedConfig, FlatPercentageConfig, HealthBand, HealthInsurancePolicy,
        SocialSecurityPolicy, TaxBracket, TaxConfig, TieredScheduleConfig, TieredTwoBandConfig,
    };
    use crate::error::EngineError;
    use crate::models::{Allowances, VoluntaryDeductions};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn nhif_bands() -> Vec<HealthBand> {
        [
            ("0", "5999", "150"),
            ("6000", "7999", "300"),
            ("8000", "11999", "400"),
            ("12000", "14999", "500"),
            ("15000", "19999", "600"),
            ("20000", "24999", "750"),
            ("25000", "29999", "850"),
            ("30000", "34999", "900"),
            ("35000", "39999", "950"),
            ("40000", "44999", "1000"),
            ("45000", "49999", "1100"),
            ("50000", "59999", "1200"),
            ("60000", "69999", "1300"),
            ("70000", "79999", "1400"),
            ("80000", "89999", "1500"),
            ("90000", "99999", "1600"),
        ]
        .iter()
        .map(|(min, max, amount)| HealthBand {
            min: dec(min),
            max: dec(max),
            amount: dec(amount),
        })
        .collect()
    }

    fn default_config() -> PayrollConfig {
        PayrollConfig {
            tax: TaxConfig {
                brackets: vec![
                    TaxBracket {
                        upper_bound: Some(dec("24000")),
                        rate: dec("0.10"),
                    },
                    TaxBracket {
                        upper_bound: Some(dec("32333")),
                        rate: dec("0.25"),
                    },
                    TaxBracket {
                        upper_bound: Some(dec("500000")),
                        rate: dec("0.30"),
                    },
                    TaxBracket {
                        upper_bound: Some(dec("800000")),
                        rate: dec("0.325"),
                    },
                    TaxBracket {
                        upper_bound: None,
                        rate: dec("0.35"),
                    },
                ],
                personal_relief: dec("2400"),
                deduct_social_security: true,
                deduct_housing_levy: true,
            },
            health_insurance: HealthInsurancePolicy::TieredSchedule(TieredScheduleConfig {
                bands: nhif_bands(),
                ceiling: dec("1700"),
            }),
            social_security: SocialSecurityPolicy::TieredTwoBand(TieredTwoBandConfig {
                lower_limit: dec("8000"),
                upper_limit: dec("72000"),
                rate: dec("0.06"),
            }),
            housing_levy_rate: dec("0.015"),
            work_injury_rate: dec("0.002"),
        }
    }

    fn scenario_input() -> CompensationInput {
        CompensationInput {
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
            voluntary_deductions: VoluntaryDeductions::default(),
        }
    }

    /// PR-001: full scenario with default policies
    #[test]
    fn test_full_scenario() {
        let result = compute_payroll(&scenario_input(), &default_config()).unwrap();

        assert_eq!(result.gross_pay, dec("265000"));
        assert_eq!(result.statutory.social_security, dec("4320"));
        assert_eq!(result.statutory.housing_levy, dec("3975"));
        assert_eq!(result.statutory.health_insurance, dec("1700"));
        // taxable = 265,000 - 4,320 - 3,975 = 256,705
        assert_eq!(result.taxable_income, dec("256705"));
        assert_eq!(result.statutory.paye_tax, dec("69394.85"));
        assert_eq!(result.work_injury_insurance, dec("530"));
        assert_eq!(result.total_deductions, dec("79389.85"));
        assert_eq!(result.net_pay, dec("185610.15"));
        assert!(result.audit.warnings.is_empty());
    }

    /// PR-002: work injury premium is excluded from net pay
    #[test]
    fn test_work_injury_excluded_from_net_pay() {
        let result = compute_payroll(&scenario_input(), &default_config()).unwrap();

        assert_eq!(
            result.total_deductions,
            result.statutory.total() + result.voluntary_deductions.total()
        );
        assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
        // Present in the result, absent from the subtraction
        assert!(result.work_injury_insurance > Decimal::ZERO);
    }

    /// PR-003: voluntary deductions reduce net pay only
    #[test]
    fn test_voluntary_deductions_reduce_net_pay() {
        let mut input = scenario_input();
        input.voluntary_deductions = VoluntaryDeductions {
            loan: dec("5000"),
            advance: dec("2000"),
            welfare: dec("1000"),
            other: dec("500"),
        };
        let result = compute_payroll(&input, &default_config()).unwrap();

        assert_eq!(result.gross_pay, dec("265000"));
        assert_eq!(result.taxable_income, dec("256705"));
        assert_eq!(result.total_deductions, dec("87889.85"));
        assert_eq!(result.net_pay, dec("177110.15"));
    }

    /// PR-004: negative input fails fast with no partial result
    #[test]
    fn test_negative_basic_salary_is_invalid_input() {
        let mut input = scenario_input();
        input.basic_salary = dec("-180000");
        let err = compute_payroll(&input, &default_config()).unwrap_err();
        match err {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "basic_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// PR-005: idempotence — identical inputs, identical results
    #[test]
    fn test_idempotence() {
        let input = scenario_input();
        let config = default_config();
        let first = compute_payroll(&input, &config).unwrap();
        let second = compute_payroll(&input, &config).unwrap();
        assert_eq!(first, second);
    }

    /// PR-006: deductions exceeding gross yield a warning, not a clamp
    #[test]
    fn test_negative_net_pay_is_flagged_not_clamped() {
        let input = CompensationInput {
            basic_salary: dec("10000"),
            voluntary_deductions: VoluntaryDeductions {
                loan: dec("15000"),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute_payroll(&input, &default_config()).unwrap();

        assert!(result.net_pay < Decimal::ZERO);
        assert!(result.has_negative_net_pay());
        assert_eq!(result.audit.warnings.len(), 1);
        assert_eq!(result.audit.warnings[0].code, "NEGATIVE_NET_PAY");
        assert_eq!(result.audit.warnings[0].severity, "high");
    }

    /// PR-007: alternate policies change only their own deduction
    #[test]
    fn test_alternate_policies() {
        let mut config = default_config();
        config.health_insurance = HealthInsurancePolicy::FlatPercentage(FlatPercentageConfig {
            rate: dec("0.0275"),
        });
        config.social_security = SocialSecurityPolicy::FlatCapped(FlatCappedConfig {
            cap: dec("18000"),
            rate: dec("0.06"),
        });

        let result = compute_payroll(&scenario_input(), &config).unwrap();
        assert_eq!(result.statutory.health_insurance, dec("7287.50"));
        assert_eq!(result.statutory.social_security, dec("1080"));
        // taxable = 265,000 - 1,080 - 3,975 = 259,945
        assert_eq!(result.taxable_income, dec("259945"));
    }

    /// PR-008: zero gross pay
    #[test]
    fn test_zero_input() {
        let result = compute_payroll(&CompensationInput::default(), &default_config()).unwrap();

        assert_eq!(result.gross_pay, Decimal::ZERO);
        assert_eq!(result.statutory.paye_tax, Decimal::ZERO);
        // Tiered schedule's first band starts at zero
        assert_eq!(result.statutory.health_insurance, dec("150"));
        assert_eq!(result.statutory.social_security, Decimal::ZERO);
        assert_eq!(result.statutory.housing_levy, Decimal::ZERO);
        assert_eq!(result.net_pay, dec("-150"));
        assert_eq!(result.audit.warnings[0].code, "NEGATIVE_NET_PAY");
    }

    /// PR-009: audit trace covers every rule in order
    #[test]
    fn test_audit_trace_order() {
        let result = compute_payroll(&scenario_input(), &default_config()).unwrap();
        let rule_ids: Vec<&str> = result
            .audit
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "gross_pay",
                "health_insurance",
                "social_security",
                "housing_levy",
                "work_injury",
                "taxable_income",
                "paye_tax",
                "net_pay"
            ]
        );
        for (i, step) in result.audit.steps.iter().enumerate() {
            assert_eq!(step.step_number, (i + 1) as u32);
        }
    }

    /// PR-010: pre-tax flags off means taxable income equals gross
    #[test]
    fn test_pre_tax_flags_off() {
        let mut config = default_config();
        config.tax.deduct_social_security = false;
        config.tax.deduct_housing_levy = false;

        let result = compute_payroll(&scenario_input(), &config).unwrap();
        assert_eq!(result.taxable_income, dec("265000"));
    }
}
