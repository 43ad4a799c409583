//! Statutory Payroll Engine for Kenyan payroll
//!
//! This crate computes gross pay, PAYE income tax, and statutory deductions
//! (health insurance, social security, housing levy, work injury insurance)
//! from raw compensation inputs, per a configurable Kenyan rate schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
