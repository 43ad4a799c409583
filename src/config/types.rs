//! Configuration types for the statutory rate schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML schedule files, plus the resolved
//! [`PayrollConfig`] passed into the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// ISO country code of the jurisdiction (e.g., "KE").
    pub jurisdiction: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective year of the schedule.
    pub version: String,
    /// URL to the official source documentation.
    pub source_url: String,
}

/// A single PAYE bracket: income up to `upper_bound` is taxed at `rate`
/// on the portion falling within the bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound of the bracket. `None` means unbounded
    /// (the top bracket).
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied within this bracket.
    pub rate: Decimal,
}

/// PAYE configuration from tax.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// The ascending bracket table. The last bracket must be unbounded.
    pub brackets: Vec<TaxBracket>,
    /// Monthly personal relief subtracted from gross bracket tax.
    pub personal_relief: Decimal,
    /// Whether the social security contribution is deducted from gross
    /// pay before applying the bracket table.
    pub deduct_social_security: bool,
    /// Whether the housing levy is deducted from gross pay before
    /// applying the bracket table.
    pub deduct_housing_levy: bool,
}

impl TaxConfig {
    /// Validates the bracket table.
    ///
    /// Brackets must be non-empty, strictly ascending by upper bound,
    /// and end with a single unbounded bracket.
    pub fn validate(&self, path: &str) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidConfig {
                path: path.to_string(),
                message: "tax bracket table is empty".to_string(),
            });
        }

        let mut previous: Option<Decimal> = None;
        for (i, bracket) in self.brackets.iter().enumerate() {
            match bracket.upper_bound {
                Some(bound) => {
                    if i == self.brackets.len() - 1 {
                        return Err(EngineError::InvalidConfig {
                            path: path.to_string(),
                            message: "last tax bracket must be unbounded".to_string(),
                        });
                    }
                    if previous.is_some_and(|p| bound <= p) {
                        return Err(EngineError::InvalidConfig {
                            path: path.to_string(),
                            message: format!(
                                "tax brackets must be strictly ascending (bracket {} has bound {})",
                                i, bound
                            ),
                        });
                    }
                    previous = Some(bound);
                }
                None => {
                    if i != self.brackets.len() - 1 {
                        return Err(EngineError::InvalidConfig {
                            path: path.to_string(),
                            message: format!("only the last tax bracket may be unbounded (bracket {})", i),
                        });
                    }
                }
            }
        }

        if self.personal_relief < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                path: path.to_string(),
                message: "personal relief must not be negative".to_string(),
            });
        }

        Ok(())
    }
}

/// A single band in the tiered health insurance schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthBand {
    /// Inclusive lower bound of gross pay for this band.
    pub min: Decimal,
    /// Inclusive upper bound of gross pay for this band.
    pub max: Decimal,
    /// Fixed contribution for gross pay within this band.
    pub amount: Decimal,
}

/// Parameters for the tiered fixed-amount health insurance schedule
/// (NHIF-style).
#[derive(Debug, Clone, Deserialize)]
pub struct TieredScheduleConfig {
    /// Ascending, non-overlapping gross pay bands.
    pub bands: Vec<HealthBand>,
    /// Contribution for gross pay above the top band.
    pub ceiling: Decimal,
}

/// Parameters for the flat-percentage health insurance policy
/// (SHIF-style).
#[derive(Debug, Clone, Deserialize)]
pub struct FlatPercentageConfig {
    /// Contribution rate applied to gross pay.
    pub rate: Decimal,
}

/// A health insurance contribution policy.
///
/// Two policies appear in Kenyan payroll practice and are kept as
/// explicitly named variants rather than being merged.
#[derive(Debug, Clone)]
pub enum HealthInsurancePolicy {
    /// Tiered fixed-amount schedule (NHIF-style).
    TieredSchedule(TieredScheduleConfig),
    /// Flat percentage of gross pay (SHIF-style).
    FlatPercentage(FlatPercentageConfig),
}

/// Parameters for the two-band tiered social security contribution
/// (NSSF Act 2013).
#[derive(Debug, Clone, Deserialize)]
pub struct TieredTwoBandConfig {
    /// Upper bound of tier I pensionable pay.
    pub lower_limit: Decimal,
    /// Upper bound of tier II pensionable pay.
    pub upper_limit: Decimal,
    /// Contribution rate applied within both tiers.
    pub rate: Decimal,
}

/// Parameters for the single-tier capped social security contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatCappedConfig {
    /// Pensionable pay cap.
    pub cap: Decimal,
    /// Contribution rate applied up to the cap.
    pub rate: Decimal,
}

/// A social security contribution policy.
#[derive(Debug, Clone)]
pub enum SocialSecurityPolicy {
    /// Two-band tiered contribution (NSSF Act 2013).
    TieredTwoBand(TieredTwoBandConfig),
    /// Single-tier contribution capped at a fixed pensionable pay.
    FlatCapped(FlatCappedConfig),
}

/// Key selecting a health insurance policy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthPolicyKey {
    /// The tiered fixed-amount schedule.
    TieredSchedule,
    /// The flat percentage of gross pay.
    FlatPercentage,
}

impl HealthPolicyKey {
    /// Parses a policy key from its configuration string.
    pub fn parse(key: &str) -> EngineResult<Self> {
        match key {
            "tiered_schedule" => Ok(Self::TieredSchedule),
            "flat_percentage" => Ok(Self::FlatPercentage),
            other => Err(EngineError::UnknownPolicy {
                kind: "health_insurance".to_string(),
                key: other.to_string(),
            }),
        }
    }
}

/// Key selecting a social security policy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPolicyKey {
    /// The two-band tiered contribution.
    TieredTwoBand,
    /// The single-tier capped contribution.
    FlatCapped,
}

impl SocialPolicyKey {
    /// Parses a policy key from its configuration string.
    pub fn parse(key: &str) -> EngineResult<Self> {
        match key {
            "tiered_two_band" => Ok(Self::TieredTwoBand),
            "flat_capped" => Ok(Self::FlatCapped),
            other => Err(EngineError::UnknownPolicy {
                kind: "social_security".to_string(),
                key: other.to_string(),
            }),
        }
    }
}

/// The health insurance section of deductions.yaml.
///
/// Both parameter sets are always present; `default_policy` names the
/// one used when the caller does not override it.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInsuranceSection {
    /// The policy key used when no override is given.
    pub default_policy: String,
    /// Parameters for the tiered schedule.
    pub tiered_schedule: TieredScheduleConfig,
    /// Parameters for the flat percentage policy.
    pub flat_percentage: FlatPercentageConfig,
}

/// The social security section of deductions.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialSecuritySection {
    /// The policy key used when no override is given.
    pub default_policy: String,
    /// Parameters for the two-band tiered contribution.
    pub tiered_two_band: TieredTwoBandConfig,
    /// Parameters for the capped single-tier contribution.
    pub flat_capped: FlatCappedConfig,
}

/// A flat levy applied to gross pay.
#[derive(Debug, Clone, Deserialize)]
pub struct LevyRate {
    /// The levy rate.
    pub rate: Decimal,
}

/// Non-tax deduction configuration from deductions.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionsConfig {
    /// Health insurance policies.
    pub health_insurance: HealthInsuranceSection,
    /// Social security policies.
    pub social_security: SocialSecuritySection,
    /// Affordable housing levy.
    pub housing_levy: LevyRate,
    /// Work injury (WIBA) premium rate, employer-side.
    pub work_injury: LevyRate,
}

impl DeductionsConfig {
    /// Validates band tables and default policy keys.
    pub fn validate(&self, path: &str) -> EngineResult<()> {
        let bands = &self.health_insurance.tiered_schedule.bands;
        if bands.is_empty() {
            return Err(EngineError::InvalidConfig {
                path: path.to_string(),
                message: "tiered health insurance schedule has no bands".to_string(),
            });
        }
        for band in bands {
            if band.min > band.max {
                return Err(EngineError::InvalidConfig {
                    path: path.to_string(),
                    message: format!(
                        "health insurance band {}..{} has min above max",
                        band.min, band.max
                    ),
                });
            }
        }
        for window in bands.windows(2) {
            if window[1].min <= window[0].max {
                return Err(EngineError::InvalidConfig {
                    path: path.to_string(),
                    message: format!(
                        "health insurance bands must be ascending and non-overlapping ({}..{} then {}..{})",
                        window[0].min, window[0].max, window[1].min, window[1].max
                    ),
                });
            }
        }

        // Default keys must name a known variant so a misconfigured
        // schedule fails at load, not per-request.
        HealthPolicyKey::parse(&self.health_insurance.default_policy)?;
        SocialPolicyKey::parse(&self.social_security.default_policy)?;

        Ok(())
    }
}

/// Per-request policy variant overrides.
///
/// `None` fields fall back to the schedule's default policy keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySelection {
    /// Health insurance policy override.
    #[serde(default)]
    pub health_insurance: Option<HealthPolicyKey>,
    /// Social security policy override.
    #[serde(default)]
    pub social_security: Option<SocialPolicyKey>,
}

/// The resolved configuration passed into
/// [`compute_payroll`](crate::calculation::compute_payroll).
///
/// Holds one concrete policy per deduction; resolution of named variants
/// happens in [`StatutoryConfig::payroll_config`]. Read-only once built,
/// so it can be shared freely across parallel batch calculations.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// PAYE bracket table and relief.
    pub tax: TaxConfig,
    /// The selected health insurance policy.
    pub health_insurance: HealthInsurancePolicy,
    /// The selected social security policy.
    pub social_security: SocialSecurityPolicy,
    /// Affordable housing levy rate.
    pub housing_levy_rate: Decimal,
    /// Work injury premium rate.
    pub work_injury_rate: Decimal,
}

/// The complete statutory schedule loaded from YAML files.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    metadata: ScheduleMetadata,
    tax: TaxConfig,
    deductions: DeductionsConfig,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: ScheduleMetadata, tax: TaxConfig, deductions: DeductionsConfig) -> Self {
        Self {
            metadata,
            tax,
            deductions,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the PAYE configuration.
    pub fn tax(&self) -> &TaxConfig {
        &self.tax
    }

    /// Returns the deduction configuration.
    pub fn deductions(&self) -> &DeductionsConfig {
        &self.deductions
    }

    /// Resolves the health insurance policy for an optional override key.
    pub fn health_insurance_policy(
        &self,
        key: Option<HealthPolicyKey>,
    ) -> EngineResult<HealthInsurancePolicy> {
        let key = match key {
            Some(key) => key,
            None => HealthPolicyKey::parse(&self.deductions.health_insurance.default_policy)?,
        };
        Ok(match key {
            HealthPolicyKey::TieredSchedule => HealthInsurancePolicy::TieredSchedule(
                self.deductions.health_insurance.tiered_schedule.clone(),
            ),
            HealthPolicyKey::FlatPercentage => HealthInsurancePolicy::FlatPercentage(
                self.deductions.health_insurance.flat_percentage.clone(),
            ),
        })
    }

    /// Resolves the social security policy for an optional override key.
    pub fn social_security_policy(
        &self,
        key: Option<SocialPolicyKey>,
    ) -> EngineResult<SocialSecurityPolicy> {
        let key = match key {
            Some(key) => key,
            None => SocialPolicyKey::parse(&self.deductions.social_security.default_policy)?,
        };
        Ok(match key {
            SocialPolicyKey::TieredTwoBand => SocialSecurityPolicy::TieredTwoBand(
                self.deductions.social_security.tiered_two_band.clone(),
            ),
            SocialPolicyKey::FlatCapped => SocialSecurityPolicy::FlatCapped(
                self.deductions.social_security.flat_capped.clone(),
            ),
        })
    }

    /// Resolves a complete [`PayrollConfig`] for the given selection.
    pub fn payroll_config(&self, selection: &PolicySelection) -> EngineResult<PayrollConfig> {
        Ok(PayrollConfig {
            tax: self.tax.clone(),
            health_insurance: self.health_insurance_policy(selection.health_insurance)?,
            social_security: self.social_security_policy(selection.social_security)?,
            housing_levy_rate: self.deductions.housing_levy.rate,
            work_injury_rate: self.deductions.work_injury.rate,
        })
    }
}
