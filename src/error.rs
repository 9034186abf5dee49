//! Error types for the invoice engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. The invoice calculator itself
//! never fails; these errors come from configuration, date parsing and the
//! book-creation use case.

use thiserror::Error;

/// The main error type for the invoice engine.
///
/// # Example
///
/// ```
/// use invoice_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/app.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/app.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// A date string was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// A description of why parsing failed.
        message: String,
    },

    /// Input failed use-case validation.
    #[error("Validation error: {message}")]
    Validation {
        /// A description of what was invalid.
        message: String,
    },

    /// The backing repository failed.
    #[error("Repository error: {message}")]
    Repository {
        /// A description of the repository failure.
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
            path: "/missing/app.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/app.yaml"
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
    fn test_invalid_date_displays_input_and_message() {
        let error = EngineError::InvalidDate {
            input: "2024-02-30".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2024-02-30': input is out of range"
        );
    }

    #[test]
    fn test_validation_displays_message() {
        let error = EngineError::Validation {
            message: "title must not be blank".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error: title must not be blank");
    }

    #[test]
    fn test_repository_displays_message() {
        let error = EngineError::Repository {
            message: "db timeout".to_string(),
        };
        assert_eq!(error.to_string(), "Repository error: db timeout");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_validation() -> EngineResult<()> {
            Err(EngineError::Validation {
                message: "blank".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_validation()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::Validation { .. })
        ));
    }
}
