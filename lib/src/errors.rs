// lib/src/errors.rs

use thiserror::Error;
use triage_models::ValidationError;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid image data: {0}")]
    ImageDecode(#[from] base64::DecodeError),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Facility registry error: {0}")]
    Registry(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// True for errors caused by the caller's request rather than by the
    /// service itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TriageError::InvalidInput(_) | TriageError::Validation(_) | TriageError::ImageDecode(_)
        )
    }
}

impl From<config::ConfigError> for TriageError {
    fn from(err: config::ConfigError) -> Self {
        TriageError::ConfigurationError(err.to_string())
    }
}
