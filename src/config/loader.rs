//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    DeductionsConfig, PayrollConfig, PolicySelection, ScheduleMetadata, StatutoryConfig,
    TaxConfig,
};

/// Loads and provides access to a statutory rate schedule.
///
/// The `ConfigLoader` reads YAML configuration files from a schedule
/// directory and resolves policy selections into concrete
/// [`PayrollConfig`] values.
///
/// # Directory Structure
///
/// The schedule directory should have the following structure:
/// ```text
/// config/ke-2024/
/// ├── schedule.yaml   # Schedule metadata
/// ├── tax.yaml        # PAYE brackets, relief, pre-tax deduction flags
/// └── deductions.yaml # Health insurance, social security, levies
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::{ConfigLoader, PolicySelection};
///
/// let loader = ConfigLoader::load("./config/ke-2024").unwrap();
/// let config = loader.payroll_config(&PolicySelection::default()).unwrap();
/// println!("Relief: {}", config.tax.personal_relief);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule directory (e.g., "./config/ke-2024")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The tax brackets or deduction bands fail validation
    ///   (`InvalidConfig`, `UnknownPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ke-2024")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&schedule_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxConfig>(&tax_path)?;
        tax.validate(&tax_path.display().to_string())?;

        let deductions_path = path.join("deductions.yaml");
        let deductions = Self::load_yaml::<DeductionsConfig>(&deductions_path)?;
        deductions.validate(&deductions_path.display().to_string())?;

        Ok(Self {
            config: StatutoryConfig::new(metadata, tax, deductions),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory schedule.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Resolves a complete [`PayrollConfig`] for the given policy
    /// selection, falling back to the schedule's default policies.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::{ConfigLoader, HealthPolicyKey, PolicySelection};
    ///
    /// let loader = ConfigLoader::load("./config/ke-2024")?;
    /// let selection = PolicySelection {
    ///     health_insurance: Some(HealthPolicyKey::FlatPercentage),
    ///     social_security: None,
    /// };
    /// let config = loader.payroll_config(&selection)?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn payroll_config(&self, selection: &PolicySelection) -> EngineResult<PayrollConfig> {
        self.config.payroll_config(selection)
    }
}
