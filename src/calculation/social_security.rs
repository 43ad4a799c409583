//! Social security (NSSF) contribution calculation.
//!
//! The NSSF Act 2013 contribution is tiered over two pensionable pay
//! bands; an older single-tier capped variant is kept as a separately
//! named policy for schedules that still use it.

use rust_decimal::Decimal;

use crate::config::SocialSecurityPolicy;
use crate::models::AuditStep;

/// The result of the social security calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// The employee social security contribution.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the social security contribution on gross pay.
///
/// For the two-band tiered policy:
/// ```text
/// tier1 = min(gross, lower_limit) * rate
/// tier2 = max(0, min(gross, upper_limit) - lower_limit) * rate
/// ```
/// For the capped policy the contribution is `min(gross, cap) * rate`.
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
/// use payroll_engine::calculation::calculate_social_security;
/// use payroll_engine::config::{SocialSecurityPolicy, TieredTwoBandConfig};
/// use rust_decimal::Decimal;
///
/// let policy = SocialSecurityPolicy::TieredTwoBand(TieredTwoBandConfig {
///     lower_limit: Decimal::from(8_000),
///     upper_limit: Decimal::from(72_000),
///     rate: Decimal::new(6, 2),
/// });
/// let result = calculate_social_security(Decimal::from(72_000), &policy, 1);
/// assert_eq!(result.contribution, Decimal::from(4_320));
/// ```
pub fn calculate_social_security(
    gross_pay: Decimal,
    policy: &SocialSecurityPolicy,
    step_number: u32,
) -> SocialSecurityResult {
    match policy {
        SocialSecurityPolicy::TieredTwoBand(tiered) => {
            let tier1 = gross_pay.min(tiered.lower_limit) * tiered.rate;
            let tier2_pay =
                (gross_pay.min(tiered.upper_limit) - tiered.lower_limit).max(Decimal::ZERO);
            let tier2 = tier2_pay * tiered.rate;
            let contribution = tier1 + tier2;

            let audit_step = AuditStep {
                step_number,
                rule_id: "social_security".to_string(),
                rule_name: "Social Security (Tiered Two-Band)".to_string(),
                statute_ref: "NSSF Act 2013 s.20".to_string(),
                input: serde_json::json!({
                    "gross_pay": gross_pay.to_string(),
                    "policy": "tiered_two_band",
                    "lower_limit": tiered.lower_limit.to_string(),
                    "upper_limit": tiered.upper_limit.to_string(),
                    "rate": tiered.rate.to_string()
                }),
                output: serde_json::json!({
                    "tier1": tier1.to_string(),
                    "tier2": tier2.to_string(),
                    "contribution": contribution.to_string()
                }),
                reasoning: format!(
                    "Tier I {} + Tier II {} = {}",
                    tier1.normalize(),
                    tier2.normalize(),
                    contribution.normalize()
                ),
            };

            SocialSecurityResult {
                contribution,
                audit_step,
            }
        }
        SocialSecurityPolicy::FlatCapped(capped) => {
            let pensionable = gross_pay.min(capped.cap);
            let contribution = pensionable * capped.rate;

            let audit_step = AuditStep {
                step_number,
                rule_id: "social_security".to_string(),
                rule_name: "Social Security (Flat Capped)".to_string(),
                statute_ref: "NSSF Act (pre-2013)".to_string(),
                input: serde_json::json!({
                    "gross_pay": gross_pay.to_string(),
                    "policy": "flat_capped",
                    "cap": capped.cap.to_string(),
                    "rate": capped.rate.to_string()
                }),
                output: serde_json::json!({
                    "pensionable_pay": pensionable.to_string(),
                    "contribution": contribution.to_string()
                }),
                reasoning: format!(
                    "min({}, {}) x {} = {}",
                    gross_pay.normalize(),
                    capped.cap.normalize(),
                    capped.rate.normalize(),
                    contribution.normalize()
                ),
            };

            SocialSecurityResult {
                contribution,
                audit_step,
            }
        }
    }
}
