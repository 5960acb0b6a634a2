//! Error types shared across the estate platform

use thiserror::Error;

/// Result type alias for estate platform operations
pub type Result<T> = std::result::Result<T, EstateError>;

/// Main error type for cross-cutting concerns
#[derive(Error, Debug)]
pub enum EstateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl EstateError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-value error for a named field
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = EstateError::config("missing DATABASE_URL");
        assert_eq!(err.to_string(), "Configuration error: missing DATABASE_URL");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = EstateError::invalid_value("LOG_LEVEL", "verbose");
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: verbose");
    }
}
