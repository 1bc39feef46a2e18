// src/error.rs

//! Unified error handling for the resolver and its CLI.

use thiserror::Error;

/// Result type alias for navurl operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// URL parsing itself never fails on malformed input; the only URL-level
/// error is [`AppError::InvalidInput`] for values that are not strings.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input had the wrong type
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an input type error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = AppError::invalid_input("Parameter 'url' must be a string, not number");
        assert_eq!(
            err.to_string(),
            "Invalid input: Parameter 'url' must be a string, not number"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
