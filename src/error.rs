//! Error types for the Tax Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a tax computation.
//!
//! Bad form-field values are NOT errors: the engine sanitizes missing,
//! negative, and non-numeric inputs to zero at the snapshot boundary. A
//! failed wealth reconciliation is also not an error; it is returned as
//! data so the caller can block submission and show the exact difference.

use thiserror::Error;

/// The main error type for the Tax Computation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tax_engine::error::EngineError;
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

    /// No rate configuration is loaded for the requested tax year.
    ///
    /// This is fatal for the requested computation: no partial result is
    /// produced without a rate table.
    #[error("No rate configuration for tax year: {tax_year}")]
    TaxYearNotFound {
        /// The tax year that was requested (e.g., "2025-26").
        tax_year: String,
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
    fn test_tax_year_not_found_displays_year() {
        let error = EngineError::TaxYearNotFound {
            tax_year: "2019-20".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No rate configuration for tax year: 2019-20"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "slab table is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: slab table is empty");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_tax_year_not_found() -> EngineResult<()> {
            Err(EngineError::TaxYearNotFound {
                tax_year: "1999-00".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_tax_year_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
