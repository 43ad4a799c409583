//! Calculation logic for the Statutory Payroll Engine.
//!
//! This module contains all the calculation rules for deriving payroll
//! from compensation inputs: gross pay, taxable income, progressive PAYE
//! income tax, health insurance (tiered or flat-percentage), social
//! security (two-band tiered or capped), the housing levy, the
//! employer-side work injury premium, and the complete payroll pipeline.

mod gross_pay;
mod health_insurance;
mod housing_levy;
mod income_tax;
mod payroll;
mod social_security;
mod validation;
mod work_injury;

pub use gross_pay::{GrossPayResult, calculate_gross_pay};
pub use health_insurance::{HealthInsuranceResult, calculate_health_insurance};
pub use housing_levy::{HousingLevyResult, calculate_housing_levy};
pub use income_tax::{IncomeTaxResult, calculate_income_tax, calculate_taxable_income};
pub use payroll::compute_payroll;
pub use social_security::{SocialSecurityResult, calculate_social_security};
pub use validation::validate_compensation;
pub use work_injury::{WorkInjuryResult, calculate_work_injury};
