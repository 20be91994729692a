// src/core/error.rs

use config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the database-construction pipeline.
///
/// Every variant is raised before any output is produced; there is no
/// partial-result mode.
#[derive(Error, Debug)]
pub enum QrdbError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no prime found within {steps} odd candidates starting at {start}")]
    PrimeSearchExhausted { start: String, steps: usize },

    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl QrdbError {
    pub fn invalid(message: impl Into<String>) -> Self {
        QrdbError::InvalidConfiguration(message.into())
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, QrdbError::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, QrdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message() {
        let err = QrdbError::invalid("n - 1 = 9 exceeds |QR| = 5");
        assert!(err.is_invalid_configuration());
        assert_eq!(err.to_string(), "invalid configuration: n - 1 = 9 exceeds |QR| = 5");
    }

    #[test]
    fn test_prime_search_message() {
        let err = QrdbError::PrimeSearchExhausted { start: "1000".to_string(), steps: 4 };
        assert!(!err.is_invalid_configuration());
        assert!(err.to_string().contains("starting at 1000"));
    }
}
