//! Error types for the weight_core library.

use serde::Serialize;
use std::fmt;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for validation and calculation
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// The reason an input was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Input not parseable as a number
    InvalidNumber,
    /// Numeric input `<= 0` where a positive value is required
    NonPositiveValue,
    /// Gender tag outside `{male, female}`
    InvalidGender,
    /// Date text not matching `DD-MM-YYYY`
    InvalidDateFormat,
    /// End date not strictly after start date
    InvalidDateRange,
    /// Resolved day span `<= 0`
    ZeroOrNegativeDuration,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationKind::InvalidNumber => "invalid number",
            ValidationKind::NonPositiveValue => "non-positive value",
            ValidationKind::InvalidGender => "invalid gender",
            ValidationKind::InvalidDateFormat => "invalid date format",
            ValidationKind::InvalidDateRange => "invalid date range",
            ValidationKind::ZeroOrNegativeDuration => "zero or negative duration",
        };
        f.write_str(name)
    }
}

/// A rejected input, naming the offending field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Core error type for weight_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input validation or calculation error
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = ValidationError::new(
            ValidationKind::NonPositiveValue,
            "height_cm",
            "height_cm must be greater than zero.",
        );
        assert_eq!(err.to_string(), "height_cm must be greater than zero.");
    }

    #[test]
    fn test_validation_error_converts_into_error() {
        let err: Error =
            ValidationError::new(ValidationKind::InvalidGender, "gender", "bad gender").into();
        assert!(matches!(err, Error::Validation(ref v) if v.field == "gender"));
        assert_eq!(err.to_string(), "Invalid input: bad gender");
    }
}
