// models/src/errors.rs

pub use thiserror::Error;

/// A validation error raised while constructing one of the triage value types
/// from untrusted input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Pain must be a whole number on the 0-10 scale.
    #[error("pain level must be a whole number, got {0}")]
    FractionalPain(f64),
    /// Pain fell outside the 0-10 scale under the `reject` policy.
    #[error("pain level {0} is outside the 0-10 scale")]
    PainOutOfRange(i64),
    /// A numeric field was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    /// Latitude outside [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Confidence outside [0, 1].
    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f64),
    /// A bleeding value other than none, mild or heavy.
    #[error("unknown bleeding level '{0}', expected none, mild or heavy")]
    UnknownBleeding(String),
    /// A tier name that is not one of the four care tiers.
    #[error("unknown severity tier '{0}'")]
    UnknownTier(String),
    /// An unknown pain policy name.
    #[error("unknown pain policy '{0}', expected clamp or reject")]
    UnknownPainPolicy(String),
    /// A required text field was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
