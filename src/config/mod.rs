//! Configuration for the Statutory Payroll Engine.
//!
//! Rate tables are loaded from YAML schedule files and passed into the
//! calculator as immutable configuration, never read from globals.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionsConfig, FlatCappedConfig, FlatPercentageConfig, HealthBand,
    HealthInsurancePolicy, HealthInsuranceSection, HealthPolicyKey, LevyRate, PayrollConfig,
    PolicySelection, ScheduleMetadata, SocialPolicyKey, SocialSecurityPolicy,
    SocialSecuritySection, StatutoryConfig, TaxBracket, TaxConfig, TieredScheduleConfig,
    TieredTwoBandConfig,
};
