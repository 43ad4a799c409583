//! Health insurance contribution calculation.
//!
//! Two policies exist side by side in Kenyan payroll practice: the
//! tiered fixed-amount NHIF schedule and the flat-percentage SHIF rate.
//! They are explicit, named variants; the caller chooses one via
//! configuration and the engine never merges or substitutes them.

use rust_decimal::Decimal;

use crate::config::HealthInsurancePolicy;
use crate::models::AuditStep;

/// The result of the health insurance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct HealthInsuranceResult {
    /// The health insurance contribution.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the health insurance contribution on gross pay.
///
/// For the tiered schedule, lookup is driven by the band upper bounds:
/// the first band whose `max` is at or above gross pay wins, so
/// fractional gross pay between two integer bands (e.g. 5,999.50) lands
/// in the next band rather than falling through. Only gross pay above
/// the last band's `max` maps to the ceiling contribution. For the
/// flat-percentage policy the contribution is simply `gross_pay * rate`.
///
/// Assumes pre-validated (non-negative) gross pay.
///
/// # Arguments
///
/// * `gross_pay` - Total earnings before deductions
/// * `policy` - The selected policy variant with its parameters
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_health_insurance;
/// use payroll_engine::config::{FlatPercentageConfig, HealthInsurancePolicy};
/// use rust_decimal::Decimal;
///
/// let policy = HealthInsurancePolicy::FlatPercentage(FlatPercentageConfig {
///     rate: Decimal::new(275, 4), // 2.75%
/// });
/// let result = calculate_health_insurance(Decimal::from(100_000), &policy, 1);
/// assert_eq!(result.contribution, Decimal::from(2_750));
/// ```
pub fn calculate_health_insurance(
    gross_pay: Decimal,
    policy: &HealthInsurancePolicy,
    step_number: u32,
) -> HealthInsuranceResult {
    match policy {
        HealthInsurancePolicy::TieredSchedule(schedule) => {
            let matched = schedule.bands.iter().find(|band| gross_pay <= band.max);

            let (contribution, band_desc) = match matched {
                Some(band) => (band.amount, format!("band {}..{}", band.min, band.max)),
                None => (schedule.ceiling, "above top band (ceiling)".to_string()),
            };

            let audit_step = AuditStep {
                step_number,
                rule_id: "health_insurance".to_string(),
                rule_name: "Health Insurance (Tiered Schedule)".to_string(),
                statute_ref: "NHIF Act s.15".to_string(),
                input: serde_json::json!({
                    "gross_pay": gross_pay.to_string(),
                    "policy": "tiered_schedule"
                }),
                output: serde_json::json!({
                    "contribution": contribution.to_string(),
                    "band": band_desc
                }),
                reasoning: format!(
                    "Gross pay {} falls in {} => contribution {}",
                    gross_pay.normalize(),
                    band_desc,
                    contribution.normalize()
                ),
            };

            HealthInsuranceResult {
                contribution,
                audit_step,
            }
        }
        HealthInsurancePolicy::FlatPercentage(flat) => {
            let contribution = gross_pay * flat.rate;

            let audit_step = AuditStep {
                step_number,
                rule_id: "health_insurance".to_string(),
                rule_name: "Health Insurance (Flat Percentage)".to_string(),
                statute_ref: "SHIF Act 2023 s.27".to_string(),
                input: serde_json::json!({
                    "gross_pay": gross_pay.to_string(),
                    "policy": "flat_percentage",
                    "rate": flat.rate.to_string()
                }),
                output: serde_json::json!({
                    "contribution": contribution.to_string()
                }),
                reasoning: format!(
                    "{} x {} = {}",
                    gross_pay.normalize(),
                    flat.rate.normalize(),
                    contribution.normalize()
                ),
            };

            HealthInsuranceResult {
                contribution,
                audit_step,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FlatPercentageConfig, HealthBand, TieredScheduleConfig};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tiered_policy() -> HealthInsurancePolicy {
        let bounds: [(&str, &str, &str); 16] = [
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
        ];
        HealthInsurancePolicy::TieredSchedule(TieredScheduleConfig {
            bands: bounds
                .iter()
                .map(|(min, max, amount)| HealthBand {
                    min: dec(min),
                    max: dec(max),
                    amount: dec(amount),
                })
                .collect(),
            ceiling: dec("1700"),
        })
    }

    fn flat_policy() -> HealthInsurancePolicy {
        HealthInsurancePolicy::FlatPercentage(FlatPercentageConfig {
            rate: dec("0.0275"),
        })
    }

    /// HI-001: top of first band
    #[test]
    fn test_tiered_at_5999() {
        let result = calculate_health_insurance(dec("5999"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("150"));
    }

    /// HI-002: bottom of second band
    #[test]
    fn test_tiered_at_6000() {
        let result = calculate_health_insurance(dec("6000"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("300"));
    }

    /// HI-003: top band
    #[test]
    fn test_tiered_at_99999() {
        let result = calculate_health_insurance(dec("99999"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("1600"));
    }

    /// HI-004: ceiling above top band
    #[test]
    fn test_tiered_ceiling_at_100000() {
        let result = calculate_health_insurance(dec("100000"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("1700"));

        let result = calculate_health_insurance(dec("500000"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("1700"));
    }

    /// HI-005: zero gross pay lands in the first band
    #[test]
    fn test_tiered_at_zero() {
        let result = calculate_health_insurance(Decimal::ZERO, &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("150"));
    }

    /// HI-006: mid-band value
    #[test]
    fn test_tiered_mid_band() {
        let result = calculate_health_insurance(dec("52500"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("1200"));
    }

    /// HI-007: fractional gross between two integer bands lands in the
    /// next band, not at the ceiling
    #[test]
    fn test_tiered_fractional_gross_between_bands() {
        let result = calculate_health_insurance(dec("5999.50"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("300"));

        let result = calculate_health_insurance(dec("7999.25"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("400"));

        // Above the last band's max the ceiling still applies
        let result = calculate_health_insurance(dec("99999.99"), &tiered_policy(), 1);
        assert_eq!(result.contribution, dec("1700"));
    }

    /// HI-008: flat percentage is 2.75% of gross
    #[test]
    fn test_flat_percentage() {
        let result = calculate_health_insurance(dec("100000"), &flat_policy(), 1);
        assert_eq!(result.contribution, dec("2750"));

        let result = calculate_health_insurance(dec("265000"), &flat_policy(), 1);
        assert_eq!(result.contribution, dec("7287.50"));
    }

    /// HI-009: flat percentage of zero is zero
    #[test]
    fn test_flat_percentage_of_zero() {
        let result = calculate_health_insurance(Decimal::ZERO, &flat_policy(), 1);
        assert_eq!(result.contribution, Decimal::ZERO);
    }

    #[test]
    fn test_tiered_audit_step_names_band() {
        let result = calculate_health_insurance(dec("6000"), &tiered_policy(), 4);
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "health_insurance");
        assert_eq!(
            result.audit_step.input["policy"].as_str().unwrap(),
            "tiered_schedule"
        );
        assert!(
            result.audit_step.output["band"]
                .as_str()
                .unwrap()
                .contains("6000..7999")
        );
    }

    #[test]
    fn test_ceiling_audit_step_names_ceiling() {
        let result = calculate_health_insurance(dec("150000"), &tiered_policy(), 1);
        assert!(
            result.audit_step.output["band"]
                .as_str()
                .unwrap()
                .contains("ceiling")
        );
    }

    #[test]
    fn test_flat_audit_step_records_rate() {
        let result = calculate_health_insurance(dec("100000"), &flat_policy(), 1);
        assert_eq!(
            result.audit_step.input["policy"].as_str().unwrap(),
            "flat_percentage"
        );
        assert_eq!(
            result.audit_step.input["rate"].as_str().unwrap(),
            "0.0275"
        );
    }
}
