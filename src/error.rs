//! Error types for the Statutory Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use thiserror::Error;

/// The main error type for the Statutory Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file parsed but contained invalid data.
    #[error("Invalid configuration in '{path}': {message}")]
    InvalidConfig {
        /// The path to the file with invalid data.
        path: String,
        /// A description of what made the configuration invalid.
        message: String,
    },

    /// A requested policy variant was not recognized.
    #[error("Unknown {kind} policy: {key}")]
    UnknownPolicy {
        /// The kind of policy (e.g., "health_insurance").
        kind: String,
        /// The policy key that was not recognized.
        key: String,
    },

    /// A compensation input field was invalid (negative money or hours).
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_path_and_message() {
        let error = EngineError::InvalidConfig {
            path: "/config/tax.yaml".to_string(),
            message: "brackets must be ascending".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration in '/config/tax.yaml': brackets must be ascending"
        );
    }

    #[test]
    fn test_unknown_policy_displays_kind_and_key() {
        let error = EngineError::UnknownPolicy {
            kind: "health_insurance".to_string(),
            key: "banded".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown health_insurance policy: banded");
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "basic_salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'basic_salary': must not be negative"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "empty bracket table".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: empty bracket table");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
